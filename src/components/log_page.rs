//! Log Page Component

use leptos::prelude::*;

use crate::browser;
use crate::components::{StatsPanel, WeekNavBar};
use crate::week::WeekNav;

/// Week header plus stats for the week named by `?date=`
#[component]
pub fn LogPage() -> impl IntoView {
    let date = browser::query_param("date");
    let week = browser::today().and_then(|today| WeekNav::for_param(date.as_deref(), today));
    if week.is_none() {
        tracing::warn!("browser date unavailable, week navigation hidden");
    }

    view! {
        <section class="log-page">
            {week.map(|week| view! { <WeekNavBar week=week /> })}
            <StatsPanel date=date />
        </section>
    }
}
