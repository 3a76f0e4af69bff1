//! Stats Panel Component
//!
//! Weekly chart and dish table for the log page. A failed load replaces
//! the whole region with the error text.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chart::ChartRegistry;
use crate::context::use_app_context;
use crate::sequence::RequestSequencer;
use crate::stats::{self, StatsDisplay, StatsView, TableRow, CHART_CANVAS_ID};

#[component]
pub fn StatsPanel(
    /// `date` query value forwarded to the backend
    date: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (view_state, set_view_state) = signal(StatsView::Loading);
    let (chart_svg, set_chart_svg) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let charts = StoredValue::new(ChartRegistry::new());
    let sequencer = Arc::new(RequestSequencer::new());

    // Load on mount and on every refresh
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        tracing::debug!(trigger, "loading weekly stats");
        let ctx = ctx.clone();
        let sequencer = sequencer.clone();
        let date = date.clone();
        spawn_local(async move {
            let Some(view) = stats::load_stats(&*ctx.transport, &sequencer, date.as_deref()).await else {
                return;
            };
            match &view {
                StatsView::Ready(display) => {
                    let svg = charts.try_update_value(|registry| {
                        registry.render(CHART_CANVAS_ID, &display.chart_points).to_svg()
                    });
                    set_chart_svg.set(svg.unwrap_or_default());
                }
                _ => {
                    charts.try_update_value(|registry| registry.destroy(CHART_CANVAS_ID));
                    set_chart_svg.set(String::new());
                }
            }
            set_view_state.set(view);
        });
    });

    view! {
        <section class="stats-container">
            {move || match view_state.get() {
                StatsView::Loading => view! { <p class="stats-loading">"読み込み中..."</p> }.into_any(),
                StatsView::Failed(message) => view! { <p class="stats-error">{message}</p> }.into_any(),
                StatsView::Ready(display) => view! {
                    <StatsReady display=display chart_svg=chart_svg />
                }.into_any(),
            }}
            <button
                type="button"
                class="stats-refresh"
                on:click=move |_| set_reload_trigger.update(|v| *v += 1)
            >
                "再読み込み"
            </button>
        </section>
    }
}

#[component]
fn StatsReady(display: StatsDisplay, chart_svg: ReadSignal<String>) -> impl IntoView {
    let StatsDisplay { table, range, .. } = display;

    view! {
        {range.map(|(start, end)| view! {
            <p class="stats-range">{format!("{} 〜 {}", start, end)}</p>
        })}
        <div id=CHART_CANVAS_ID class="chart" inner_html=move || chart_svg.get()></div>
        <table class="dish-table">
            <thead>
                <tr><th>"日付"</th><th>"品目"</th><th>"重さ"</th><th>"理由"</th></tr>
            </thead>
            <tbody id="dishTableBody">
                {table.into_iter().map(|row| match row {
                    TableRow::Record { date, dish_name, weight, reason } => view! {
                        <tr>
                            <td>{date}</td>
                            <td>{dish_name}</td>
                            <td>{weight}</td>
                            <td>{reason}</td>
                        </tr>
                    }.into_any(),
                    TableRow::Empty { colspan, text } => view! {
                        <tr>
                            <td class="empty-row" colspan=colspan.to_string()>{text}</td>
                        </tr>
                    }.into_any(),
                }).collect_view()}
            </tbody>
        </table>
    }
}
