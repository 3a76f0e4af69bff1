//! Week Navigation Component
//!
//! Range label, seven day cells and previous/next week links.

use leptos::prelude::*;

use crate::week::WeekNav;

#[component]
pub fn WeekNavBar(week: WeekNav) -> impl IntoView {
    let prev_href = week.prev_href();
    let next_href = week.next_href();
    let label = week.range_label();

    view! {
        <nav class="week-nav">
            <a class="week-nav-prev" href=prev_href>"< 前の週"</a>
            <span class="week-range">{label}</span>
            <a class="week-nav-next" href=next_href>"次の週 >"</a>
        </nav>
        <ul class="week-days">
            {week.days.into_iter().map(|day| view! {
                <li class="week-day">
                    <span class="day-num">{day.day_num}</span>
                    <span class="day-label">{day.weekday}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}
