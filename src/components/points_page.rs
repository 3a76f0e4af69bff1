//! Points Page Component
//!
//! Balance, weekly calculation button and the reward catalogue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::components::{Toast, TradeModalView};
use crate::context::use_app_context;
use crate::models::Reward;
use crate::points::{self, Balance};
use crate::store::{
    store_begin_calculation, store_end_calculation, store_set_balance, store_set_rewards, PointsState,
    PointsStateStoreFields, PointsStore, REWARDS_DATA_ID,
};
use crate::ui::TradeModal;

#[component]
pub fn PointsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: PointsStore = Store::new(PointsState::default());
    let modal = RwSignal::new(TradeModal::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    store_set_rewards(&store, browser::embedded_json::<Vec<Reward>>(REWARDS_DATA_ID).unwrap_or_default());

    // Balance on mount and after each successful calculation
    let balance_ctx = ctx.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let ctx = balance_ctx.clone();
        spawn_local(async move {
            store_set_balance(&store, points::load_balance(&*ctx.transport).await);
        });
    });

    let calculate = move |_| {
        if !store_begin_calculation(&store) {
            return;
        }
        let ctx = ctx.clone();
        spawn_local(async move {
            let reload = points::calculate_points(
                &*ctx.transport,
                &ctx.toast,
                &*ctx.scheduler,
                ctx.config.toast_duration,
            )
            .await;
            store_end_calculation(&store);
            if reload {
                set_reload_trigger.update(|v| *v += 1);
            }
        });
    };

    view! {
        <section class="points-page">
            <div class="points-balance">
                <span class="points-label">"現在のポイント"</span>
                <span
                    class=move || match store.balance().get() {
                        Balance::Failed(_) => "points-value error",
                        _ => "points-value",
                    }
                >
                    {move || store.balance().get().text()}
                </span>
            </div>
            <button
                type="button"
                class="calculate-button"
                disabled=move || store.calculating().get()
                on:click=calculate
            >
                "今週のポイントを計算"
            </button>
            <ul class="reward-list">
                {move || store.rewards().get().into_iter().map(|reward| {
                    let cost = reward.cost.to_string();
                    let item = reward.item.clone();
                    let (data_item, data_cost) = (item.clone(), cost.clone());
                    view! {
                        <li class="reward">
                            <span class="reward-item">{reward.item}</span>
                            <span class="reward-cost">{format!("{} pt", reward.cost)}</span>
                            <button
                                type="button"
                                class="trade-button"
                                data-item=data_item
                                data-cost=data_cost
                                on:click=move |_| modal.update(|m| m.open(&item, &cost))
                            >
                                "交換"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <TradeModalView modal=modal />
            <Toast />
        </section>
    }
}
