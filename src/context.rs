//! Application Context
//!
//! Configuration and the browser seams, provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{FetchTransport, Transport};
use crate::config::ClientConfig;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::ui::{show_toast, ToastState};

/// Page-wide dependencies provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub transport: Arc<dyn Transport + Send + Sync>,
    pub scheduler: Arc<dyn Scheduler + Send + Sync>,
    /// The page's single toast
    pub toast: RwSignal<ToastState>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let transport = FetchTransport::new(config.api_base.clone());
        Self {
            config,
            transport: Arc::new(transport),
            scheduler: Arc::new(BrowserScheduler),
            toast: RwSignal::new(ToastState::default()),
        }
    }

    /// Show the page toast for the configured duration
    pub fn notify(&self, message: impl Into<String>) {
        show_toast(&self.toast, &*self.scheduler, message, self.config.toast_duration);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
