//! Points Page Handlers
//!
//! Balance loading, weekly point calculation and reward trades. Each
//! handler returns what the page should show; toasts go through
//! [`show_toast`] so their auto-hide is schedulable.

use std::time::Duration;

use crate::api::{self, ApiResult, Transport};
use crate::models::{CurrentUser, WeeklyPointsResult};
use crate::scheduler::Scheduler;
use crate::ui::{show_toast, StateCell, ToastState, TradeModal};

pub const BALANCE_FAILURE_TEXT: &str = "ポイントを取得できませんでした";
pub const CALCULATED_TEXT: &str = "今週のポイントを計算しました";
pub const CALCULATE_FAILURE_PREFIX: &str = "ポイント計算に失敗しました";

/// Points balance display
#[derive(Debug, Clone, PartialEq)]
pub enum Balance {
    Loading,
    Points(f64),
    Failed(String),
}

impl Default for Balance {
    fn default() -> Self {
        Balance::Loading
    }
}

impl Balance {
    pub fn from_result(result: ApiResult<CurrentUser>) -> Self {
        match result {
            ApiResult::Success(user) => Balance::Points(user.total_points),
            other => {
                let reason = other.failure_reason().unwrap_or_default();
                Balance::Failed(format!("{}: {}", BALANCE_FAILURE_TEXT, reason))
            }
        }
    }

    pub fn text(&self) -> String {
        match self {
            Balance::Loading => "...".to_string(),
            Balance::Points(points) => points.to_string(),
            Balance::Failed(message) => message.clone(),
        }
    }
}

pub async fn load_balance(transport: &dyn Transport) -> Balance {
    let balance = Balance::from_result(api::current_user(transport).await);
    tracing::debug!(?balance, "balance loaded");
    balance
}

/// Toast text for a weekly calculation; `true` when the balance should reload
pub fn weekly_points_message(result: &ApiResult<WeeklyPointsResult>) -> (String, bool) {
    match result {
        ApiResult::Success(outcome) => {
            let mut text = outcome.message.clone().unwrap_or_else(|| CALCULATED_TEXT.to_string());
            if let Some(added) = outcome.points_added {
                text.push_str(&format!(" +{}pt", added));
            }
            if let Some(rate) = outcome.final_reduction_rate {
                text.push_str(&format!(" (削減率 {:.1}%)", rate));
            }
            (text, true)
        }
        other => {
            let reason = other.failure_reason().unwrap_or_default();
            (format!("{}: {}", CALCULATE_FAILURE_PREFIX, reason), false)
        }
    }
}

/// Post the weekly calculation, toast the result, and report whether the
/// balance needs reloading
pub async fn calculate_points<C: StateCell<ToastState>>(
    transport: &dyn Transport,
    toast: &C,
    scheduler: &dyn Scheduler,
    toast_duration: Duration,
) -> bool {
    tracing::info!("calculating weekly points");
    let result = api::calculate_weekly_points(transport).await;
    let (message, reload) = weekly_points_message(&result);
    show_toast(toast, scheduler, message, toast_duration);
    reload
}

pub fn trade_message(item: &str) -> String {
    format!("{} を交換しました！", item)
}

/// Confirm the pending trade: close the modal and toast the traded item
pub fn confirm_trade<M, C>(
    modal: &M,
    toast: &C,
    scheduler: &dyn Scheduler,
    toast_duration: Duration,
) -> Option<String>
where
    M: StateCell<TradeModal>,
    C: StateCell<ToastState>,
{
    let item = modal.modify(|modal| modal.confirm()).flatten()?;
    tracing::info!(%item, "trading reward");
    show_toast(toast, scheduler, trade_message(&item), toast_duration);
    Some(item)
}
