#![allow(warnings)]
//! Food Loss Frontend Entry Point

mod api;
mod app;
mod browser;
mod chart;
mod components;
mod config;
mod context;
mod error;
mod form;
mod knowledge;
mod logging;
mod markdown;
mod models;
mod points;
mod scheduler;
mod sequence;
mod stats;
mod store;
mod submit;
mod ui;
mod validation;
mod week;

use app::{App, Page};
use config::ClientConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ClientConfig::from_document();
    logging::init(config.log_level.as_deref());

    let Some(page) = Page::detect(|id| browser::element_by_id(id).is_some()) else {
        tracing::warn!("no mount point found, nothing to render");
        return;
    };
    let Some(root) = browser::element_by_id(page.mount_id()) else {
        return;
    };
    mount_to(root, move || view! { <App page=page config=config.clone() /> }).forget();
}
