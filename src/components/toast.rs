//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// The page toast; visibility follows the context's toast state
#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_app_context().toast;

    view! {
        <div
            id="toast"
            class=move || if toast.with(|t| t.visible) { "toast show" } else { "toast" }
        >
            {move || toast.with(|t| t.message.clone())}
        </div>
    }
}
