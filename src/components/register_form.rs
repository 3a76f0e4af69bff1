//! Register Form Component
//!
//! New account form; on success it announces and then leaves the page.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::MessageArea;
use crate::context::use_app_context;
use crate::form::{FormFields, REGISTRATION_FIELDS};
use crate::submit::{self, MessagePanel};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let form_ref = NodeRef::<html::Form>::new();
    let (panel, set_panel) = signal::<Option<MessagePanel>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            tracing::error!("register form not mounted");
            return;
        };
        let fields = FormFields::read(&form, REGISTRATION_FIELDS);
        let ctx = ctx.clone();
        spawn_local(async move {
            let outcome = submit::submit_registration(&fields, &*ctx.transport, &ctx.config).await;
            if outcome.reset_form {
                form.reset();
            }
            if let Some(redirect) = outcome.redirect {
                tracing::info!(to = %redirect.to, "redirect scheduled");
                ctx.scheduler.schedule(redirect.after, Box::new(move || browser::navigate(&redirect.to)));
            }
            set_panel.set(Some(outcome.panel));
        });
    };

    view! {
        <form id="register-form" class="register-form" node_ref=form_ref on:submit=on_submit>
            <label>"ユーザー名" <input type="text" name="username" autocomplete="username" /></label>
            <label>"メールアドレス" <input type="email" name="email" autocomplete="email" /></label>
            <label>"パスワード" <input type="password" name="password" autocomplete="new-password" /></label>
            <label>"パスワード (確認)" <input type="password" name="password_confirm" autocomplete="new-password" /></label>
            <button type="submit">"登録"</button>
        </form>
        <MessageArea panel=panel />
    }
}
