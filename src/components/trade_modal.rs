//! Trade Confirmation Modal Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::points;
use crate::ui::{CloseReason, TradeModal};

/// Confirmation dialog for a reward trade
#[component]
pub fn TradeModalView(modal: RwSignal<TradeModal>) -> impl IntoView {
    let ctx = use_app_context();
    let close = move |reason: CloseReason| modal.update(|m| m.close(reason));

    let on_confirm = move |_| {
        points::confirm_trade(&modal, &ctx.toast, &*ctx.scheduler, ctx.config.toast_duration);
    };

    view! {
        <div
            id="confirmation-modal"
            class="modal"
            style:display=move || if modal.with(|m| m.visible) { "block" } else { "none" }
            on:click=move |ev| {
                // Only the backdrop itself, not clicks bubbling from the content
                if ev.target() == ev.current_target() {
                    close(CloseReason::Overlay);
                }
            }
        >
            <div class="modal-content">
                <span class="close-button" on:click=move |_| close(CloseReason::CloseIcon)>"×"</span>
                <p>
                    <span id="item-name">{move || modal.with(|m| m.item.clone())}</span>
                    " ("
                    <span id="item-cost">{move || modal.with(|m| m.cost.clone())}</span>
                    " pt) と交換しますか？"
                </p>
                <button id="confirm-yes" type="button" on:click=on_confirm>"はい"</button>
                <button id="confirm-no" type="button" on:click=move |_| close(CloseReason::Cancel)>"いいえ"</button>
            </div>
        </div>
    }
}
