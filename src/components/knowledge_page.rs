//! Knowledge Page Component
//!
//! Category filter buttons, item cards and one detail modal per item.

use leptos::prelude::*;

use crate::browser;
use crate::context::use_app_context;
use crate::knowledge::{self, KnowledgeEntry, KNOWLEDGE_DATA_ID};
use crate::models::KnowledgeCatalog;
use crate::ui::{CategoryFilter, CloseReason, DetailModals};

const MODAL_OPEN_CLASS: &str = "modal-open";

#[component]
pub fn KnowledgePage() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = browser::embedded_json::<KnowledgeCatalog>(KNOWLEDGE_DATA_ID).unwrap_or_default();
    let entries = knowledge::entries(&catalog);
    let filter = RwSignal::new(CategoryFilter::new(ctx.config.all_filter.clone()));
    let modals = RwSignal::new(DetailModals::default());
    let buttons = filter.with_untracked(|f| f.buttons(&catalog.categories));

    Effect::new(move |_| {
        browser::set_body_class(MODAL_OPEN_CLASS, modals.with(|m| m.any_open()));
    });

    view! {
        <section class="knowledge-page">
            <div class="filter-buttons">
                {buttons.into_iter().map(|value| {
                    let label = value.clone();
                    let data_filter = value.clone();
                    let active_value = value.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if filter.with(|f| f.is_active(&active_value)) { "filter-btn active" } else { "filter-btn" }
                            data-filter=data_filter
                            on:click=move |_| filter.update(|f| f.select(&value))
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="knowledge-list">
                {entries.iter().cloned().map(|entry| view! {
                    <KnowledgeCard entry=entry filter=filter modals=modals />
                }).collect_view()}
            </div>
            {entries.into_iter().map(|entry| view! {
                <KnowledgeModal entry=entry modals=modals />
            }).collect_view()}
        </section>
    }
}

#[component]
fn KnowledgeCard(
    entry: KnowledgeEntry,
    filter: RwSignal<CategoryFilter>,
    modals: RwSignal<DetailModals>,
) -> impl IntoView {
    let KnowledgeEntry { modal_id, category, title, preview, .. } = entry;
    let shown_category = category.clone();
    let data_category = category.clone().unwrap_or_default();
    let data_target = modal_id.clone();

    view! {
        <div
            class="knowledge-item"
            data-category=data_category
            data-target=data_target
            style:display=move || if filter.with(|f| f.shows(shown_category.as_deref())) { "block" } else { "none" }
            on:click=move |_| modals.update(|m| m.open(&modal_id))
        >
            {category.map(|c| view! { <span class="knowledge-category">{c}</span> })}
            <h3 class="knowledge-title">{title}</h3>
            <p class="knowledge-preview">{preview}</p>
        </div>
    }
}

#[component]
fn KnowledgeModal(entry: KnowledgeEntry, modals: RwSignal<DetailModals>) -> impl IntoView {
    let KnowledgeEntry { modal_id, title, body_html, .. } = entry;
    let open_id = modal_id.clone();
    let close = move |reason: CloseReason| modals.update(|m| m.close(reason));

    view! {
        <div
            id=modal_id
            class="modal-overlay"
            style:display=move || if modals.with(|m| m.is_open(&open_id)) { "flex" } else { "none" }
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    close(CloseReason::Overlay);
                }
            }
        >
            <div class="modal-content">
                <span class="modal-close" on:click=move |_| close(CloseReason::CloseIcon)>"×"</span>
                <h2>{title}</h2>
                <div class="modal-body" inner_html=body_html></div>
            </div>
        </div>
    }
}
