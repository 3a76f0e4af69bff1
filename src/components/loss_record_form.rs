//! Loss Record Form Component
//!
//! Input page form: item, weight and reason, posted as one loss record.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::MessageArea;
use crate::context::use_app_context;
use crate::form::{FormFields, LOSS_RECORD_FIELDS};
use crate::submit::{self, MessagePanel};

/// Reason choices offered as radio buttons
const LOSS_REASONS: &[&str] = &["食べ残し", "作りすぎ", "期限切れ", "傷んでいた"];

#[component]
pub fn LossRecordForm() -> impl IntoView {
    let ctx = use_app_context();
    let form_ref = NodeRef::<html::Form>::new();
    let (panel, set_panel) = signal::<Option<MessagePanel>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            tracing::error!("loss record form not mounted");
            return;
        };
        let fields = FormFields::read(&form, LOSS_RECORD_FIELDS);
        let ctx = ctx.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = submit::submit_loss_record(&fields, &*ctx.transport, &ctx.config).await;
            if outcome.reset_form {
                form.reset();
            }
            set_panel.set(Some(outcome.panel));
            set_submitting.set(false);
        });
    };

    view! {
        <form id="input-form" class="record-form" node_ref=form_ref on:submit=on_submit>
            <label>
                "品目"
                <input type="text" name="item_name" placeholder="例: ごはん" />
            </label>
            <label>
                "重さ (g)"
                <input type="number" name="weight_grams" min="0" step="0.1" />
            </label>
            <fieldset class="reason-options">
                <legend>"廃棄理由"</legend>
                {LOSS_REASONS.iter().map(|reason| view! {
                    <label class="reason-option">
                        <input type="radio" name="reason_text" value=*reason />
                        {*reason}
                    </label>
                }).collect_view()}
            </fieldset>
            <button type="submit" disabled=move || submitting.get()>"記録する"</button>
        </form>
        <MessageArea panel=panel />
    }
}
