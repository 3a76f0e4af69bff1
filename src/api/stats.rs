//! Stats Endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{call, ApiRequest, ApiResult, Transport};
use crate::models::StatsResponse;

pub const WEEKLY_STATS_PATH: &str = "/api/weekly_stats";

/// Characters escaped inside a query value
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Stats path, suffixed with `?date=` when a non-empty date is given
pub fn weekly_stats_path(date: Option<&str>) -> String {
    match date.filter(|d| !d.is_empty()) {
        Some(date) => format!(
            "{}?date={}",
            WEEKLY_STATS_PATH,
            utf8_percent_encode(date, QUERY_VALUE_ENCODE_SET)
        ),
        None => WEEKLY_STATS_PATH.to_string(),
    }
}

pub async fn weekly_stats(transport: &dyn Transport, date: Option<&str>) -> ApiResult<StatsResponse> {
    call(transport, Ok(ApiRequest::get(weekly_stats_path(date)))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_stats_path() {
        assert_eq!(weekly_stats_path(None), "/api/weekly_stats");
        assert_eq!(weekly_stats_path(Some("")), "/api/weekly_stats");
        assert_eq!(weekly_stats_path(Some("2025-06-01")), "/api/weekly_stats?date=2025-06-01");
        assert_eq!(weekly_stats_path(Some("a&b")), "/api/weekly_stats?date=a%26b");
    }
}
