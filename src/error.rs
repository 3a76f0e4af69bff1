//! Transport Errors
//!
//! Failures below the HTTP status level: the request never completed,
//! or its body could not be produced or read.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Request never completed (offline, DNS, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived but its body could not be read
    #[error("unreadable response body: {0}")]
    Body(String),
    /// Payload could not be serialised to JSON
    #[error("could not encode request: {0}")]
    Encode(String),
}
