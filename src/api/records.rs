//! Loss Record Endpoints

use super::{call_status, ApiRequest, ApiResult, Transport};
use crate::models::LossRecordPayload;

pub const ADD_LOSS_RECORD_PATH: &str = "/api/add_loss_record";

/// Submit one food-loss record; the success body is not used
pub async fn add_loss_record(transport: &dyn Transport, payload: &LossRecordPayload) -> ApiResult<()> {
    call_status(transport, ApiRequest::post_json(ADD_LOSS_RECORD_PATH, payload)).await
}
