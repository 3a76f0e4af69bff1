//! User Endpoints

use serde_json::{Map, Value};

use super::{call, call_status, ApiRequest, ApiResult, Transport};
use crate::models::CurrentUser;

pub const REGISTER_USER_PATH: &str = "/api/register_user";
pub const CURRENT_USER_PATH: &str = "/api/user/me";

/// Register a new account (expects 201 on success)
pub async fn register_user(transport: &dyn Transport, fields: &Map<String, Value>) -> ApiResult<()> {
    call_status(transport, ApiRequest::post_json(REGISTER_USER_PATH, fields)).await
}

/// Fetch the logged-in user's point balance
pub async fn current_user(transport: &dyn Transport) -> ApiResult<CurrentUser> {
    call(transport, Ok(ApiRequest::get(CURRENT_USER_PATH))).await
}
