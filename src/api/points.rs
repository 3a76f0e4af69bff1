//! Points Endpoints

use super::{call_with, ApiRequest, ApiResult, Transport};
use crate::models::WeeklyPointsResult;

pub const CALCULATE_WEEKLY_POINTS_PATH: &str = "/api/calculate_weekly_points";

/// Ask the backend to recompute and award this week's points.
/// Success is status-driven; a body without the optional summary fields
/// (empty, `null`, not an object) reads as an empty summary.
pub async fn calculate_weekly_points(transport: &dyn Transport) -> ApiResult<WeeklyPointsResult> {
    call_with(transport, Ok(ApiRequest::post_empty(CALCULATE_WEEKLY_POINTS_PATH)), |body| {
        Ok(serde_json::from_str::<Option<WeeklyPointsResult>>(body)
            .ok()
            .flatten()
            .unwrap_or_default())
    })
    .await
}
