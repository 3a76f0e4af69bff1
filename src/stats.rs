//! Weekly Stats View
//!
//! Turns a stats response into what the log page shows: chart bars, table
//! rows (with a single "no records" row for an empty week), or one inline
//! error in place of both.

use crate::api::{self, ApiResult, Transport};
use crate::models::{DailyGraphPoint, DishRow, StatsResponse};
use crate::sequence::RequestSequencer;

/// Canvas the daily chart is bound to
pub const CHART_CANVAS_ID: &str = "dailyLossChart";
/// Columns of the dish table
pub const TABLE_COLUMNS: usize = 4;
pub const WEIGHT_UNIT: &str = "g";
pub const NO_RECORDS_TEXT: &str = "この週の廃棄品目の記録はありません。";

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Record {
        date: String,
        dish_name: String,
        weight: String,
        reason: String,
    },
    /// Single centered cell spanning every column
    Empty { colspan: usize, text: String },
}

pub fn dish_table_rows(rows: &[DishRow]) -> Vec<TableRow> {
    if rows.is_empty() {
        return vec![TableRow::Empty { colspan: TABLE_COLUMNS, text: NO_RECORDS_TEXT.to_string() }];
    }
    rows.iter()
        .map(|row| TableRow::Record {
            date: row.date.clone(),
            dish_name: row.dish_name.clone(),
            weight: format!("{} {}", row.weight_grams, WEIGHT_UNIT),
            reason: row.reason.clone(),
        })
        .collect()
}

/// Everything rendered for one successful response
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDisplay {
    pub chart_points: Vec<DailyGraphPoint>,
    pub table: Vec<TableRow>,
    /// Backend-reported week bounds, when present
    pub range: Option<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsView {
    Loading,
    Ready(StatsDisplay),
    /// Replaces the whole stats region
    Failed(String),
}

pub fn failure_message(reason: &str) -> String {
    format!("統計データを読み込めませんでした。エラー: {}", reason)
}

impl StatsView {
    pub fn from_response(stats: StatsResponse) -> Self {
        let range = match (stats.week_start, stats.week_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        };
        StatsView::Ready(StatsDisplay {
            table: dish_table_rows(&stats.dish_table),
            chart_points: stats.daily_graph_data,
            range,
        })
    }

    pub fn from_result(result: ApiResult<StatsResponse>) -> Self {
        match result {
            ApiResult::Success(stats) => Self::from_response(stats),
            other => {
                let reason = other.failure_reason().unwrap_or_default();
                StatsView::Failed(failure_message(&reason))
            }
        }
    }
}

/// Fetch one stats cycle; `None` when a newer cycle started meanwhile
pub async fn load_stats(
    transport: &dyn Transport,
    sequencer: &RequestSequencer,
    date: Option<&str>,
) -> Option<StatsView> {
    let token = sequencer.begin();
    let result = api::weekly_stats(transport, date).await;
    if !sequencer.is_current(token) {
        tracing::info!("discarding superseded stats response");
        return None;
    }
    Some(StatsView::from_result(result))
}
