//! Browser Transport
//!
//! `fetch`-backed [`Transport`] sending same-origin credentials so the
//! backend session cookie travels with every call.

use async_trait::async_trait;
use reqwasm::http::{Request, RequestCredentials};

use super::{ApiRequest, Method, RawResponse, Transport};
use crate::error::TransportError;

#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    base: String,
}

impl FetchTransport {
    /// `base` is prefixed to every request path; empty means same origin
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        if self.base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base.trim_end_matches('/'), path.trim_start_matches('/'))
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url(&request.path);
        let mut req = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        req = req
            .header("Accept", "application/json")
            .credentials(RequestCredentials::SameOrigin);
        if let Some(body) = request.body {
            req = req.header("Content-Type", "application/json").body(body.to_string());
        }

        let resp = req.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
