//! Backend API Wrappers
//!
//! Typed bindings to the JSON endpoints, organized by domain. Every call
//! goes through a [`Transport`] so handlers can be driven by a mock in tests.

mod fetch;
mod points;
mod records;
mod stats;
mod users;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::TransportError;
use crate::models::ValidationDetail;

// Re-export all public items
pub use fetch::*;
pub use points::*;
pub use records::*;
pub use stats::*;
pub use users::*;

// ========================
// Requests & Responses
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Outbound request, path relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    /// POST with a JSON-encoded body
    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        Ok(Self { method: Method::Post, path: path.into(), body: Some(body) })
    }

    /// POST without a body
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`ApiRequest`] to the backend
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

// ========================
// Result Interpretation
// ========================

pub const STATUS_UNPROCESSABLE: u16 = 422;

/// Outcome of one API call, consumed immediately by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    ValidationError(Vec<ValidationDetail>),
    ServerError(String),
    NetworkError(String),
}

impl<T> ApiResult<T> {
    /// Branch on the response in order: 2xx, 422, other status, no response.
    /// `decode` only sees 2xx bodies.
    pub fn interpret(
        response: Result<RawResponse, TransportError>,
        decode: impl FnOnce(&str) -> Result<T, String>,
    ) -> Self {
        let response = match response {
            Ok(response) => response,
            Err(err) => return ApiResult::NetworkError(err.to_string()),
        };

        if response.is_success() {
            return match decode(&response.body) {
                Ok(value) => ApiResult::Success(value),
                Err(e) => ApiResult::ServerError(format!("invalid response body: {}", e)),
            };
        }

        // Non-JSON error bodies fall through to the status fallback
        let body: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        if response.status == STATUS_UNPROCESSABLE {
            let details = body
                .get("details")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().map(ValidationDetail::from_entry).collect())
                .unwrap_or_default();
            ApiResult::ValidationError(details)
        } else {
            ApiResult::ServerError(
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("API error: {}", response.status)),
            )
        }
    }
}

impl<T: DeserializeOwned> ApiResult<T> {
    /// 2xx body parsed as JSON `T` (an empty body reads as `null`)
    pub fn from_response(response: Result<RawResponse, TransportError>) -> Self {
        Self::interpret(response, decode_json)
    }
}

impl ApiResult<()> {
    /// Success decided by status alone; the 2xx body is never read
    pub fn from_status(response: Result<RawResponse, TransportError>) -> Self {
        Self::interpret(response, |_| Ok(()))
    }
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| e.to_string())
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// Short reason for logging and inline error display
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::ValidationError(details) => Some(format!("{} validation error(s)", details.len())),
            ApiResult::ServerError(message) | ApiResult::NetworkError(message) => Some(message.clone()),
        }
    }
}

/// Send a request, decoding a 2xx body with `decode`
pub async fn call_with<T>(
    transport: &dyn Transport,
    request: Result<ApiRequest, TransportError>,
    decode: impl FnOnce(&str) -> Result<T, String>,
) -> ApiResult<T> {
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            tracing::error!("request not sent: {}", err);
            return ApiResult::NetworkError(err.to_string());
        }
    };
    tracing::debug!(method = ?request.method, path = %request.path, "sending request");
    let path = request.path.clone();
    let result = ApiResult::interpret(transport.send(request).await, decode);
    if let Some(reason) = result.failure_reason() {
        tracing::warn!(%path, "request failed: {}", reason);
    }
    result
}

/// Send a request and parse the 2xx body as JSON
pub async fn call<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Result<ApiRequest, TransportError>,
) -> ApiResult<T> {
    call_with(transport, request, decode_json).await
}

/// Send a request whose 2xx body is not used
pub async fn call_status(
    transport: &dyn Transport,
    request: Result<ApiRequest, TransportError>,
) -> ApiResult<()> {
    call_with(transport, request, |_| Ok(())).await
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    fn response(status: u16, body: &str) -> Result<RawResponse, TransportError> {
        Ok(RawResponse { status, body: body.to_string() })
    }

    #[test]
    fn test_success_ignores_body() {
        let result: ApiResult<IgnoredAny> = ApiResult::from_response(response(201, r#"{"record_id": 4}"#));
        assert!(result.is_success());
        let empty: ApiResult<IgnoredAny> = ApiResult::from_response(response(204, ""));
        assert!(empty.is_success());
    }

    #[test]
    fn test_status_only_success_accepts_any_body() {
        assert_eq!(ApiResult::<()>::from_status(response(200, "OK")), ApiResult::Success(()));
        assert_eq!(ApiResult::<()>::from_status(response(201, "<html></html>")), ApiResult::Success(()));
        assert_eq!(
            ApiResult::<()>::from_status(response(500, r#"{"message": "boom"}"#)),
            ApiResult::ServerError("boom".to_string())
        );
    }

    #[test]
    fn test_422_keeps_every_entry_with_odd_locations() {
        let body = r#"{"details": [
            {"loc": ["weight_grams", 1.5], "msg": "bad number"},
            {"loc": ["reason_text"], "msg": "invalid reason"},
            {"loc": [true, null], "msg": 42}
        ]}"#;
        let result: ApiResult<()> = ApiResult::from_response(response(422, body));
        let ApiResult::ValidationError(details) = result else {
            panic!("expected validation error");
        };
        let lines = crate::validation::format_validation_errors(&details);
        assert_eq!(
            lines,
            vec![
                "[weight_grams.1.5]: bad number".to_string(),
                "[reason_text]: invalid reason".to_string(),
                format!("[{}]: 42", crate::validation::UNKNOWN_FIELD),
            ]
        );
    }

    #[test]
    fn test_422_collects_details() {
        let body = r#"{"message": "invalid", "details": [{"loc": ["weight_grams"], "msg": "must be >= 0"}]}"#;
        let result: ApiResult<IgnoredAny> = ApiResult::from_response(response(422, body));
        match result {
            ApiResult::ValidationError(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].msg, "must be >= 0");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_422_without_details_is_empty_list() {
        let result: ApiResult<()> = ApiResult::from_response(response(422, "{}"));
        assert_eq!(result, ApiResult::ValidationError(vec![]));
    }

    #[test]
    fn test_other_status_uses_message() {
        let result: ApiResult<()> =
            ApiResult::from_response(response(401, r#"{"message": "認証が必要です。"}"#));
        assert_eq!(result, ApiResult::ServerError("認証が必要です。".to_string()));
    }

    #[test]
    fn test_other_status_without_json_falls_back_to_status() {
        let result: ApiResult<()> = ApiResult::from_response(response(502, "<html>Bad Gateway</html>"));
        assert_eq!(result, ApiResult::ServerError("API error: 502".to_string()));
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let result: ApiResult<IgnoredAny> =
            ApiResult::from_response(Err(TransportError::Network("offline".to_string())));
        assert!(matches!(result, ApiResult::NetworkError(_)));
    }

    #[test]
    fn test_unparsable_success_body_is_server_error() {
        let result: ApiResult<crate::models::CurrentUser> = ApiResult::from_response(response(200, "[]"));
        assert!(matches!(result, ApiResult::ServerError(_)));
    }
}
