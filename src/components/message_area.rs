//! Message Area Component
//!
//! Shows the outcome panel of the last form submission.

use leptos::prelude::*;

use crate::submit::MessagePanel;

/// Message area under a form; empty until the first submission
#[component]
pub fn MessageArea(panel: ReadSignal<Option<MessagePanel>>) -> impl IntoView {
    view! {
        <div id="messageArea" class="message-area">
            {move || panel.get().map(|panel| match panel {
                MessagePanel::Success(text) => view! {
                    <p class="message success">{text}</p>
                }.into_any(),
                MessagePanel::Invalid { heading, lines } => view! {
                    <div class="message invalid">
                        <p>{heading}</p>
                        <ul>
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    </div>
                }.into_any(),
                MessagePanel::Error(text) => view! {
                    <p class="message error">{text}</p>
                }.into_any(),
            })}
        </div>
    }
}
