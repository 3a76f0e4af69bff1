//! Food Loss Frontend App
//!
//! Picks the page from the mount point present in the document and
//! provides the shared context to it.

use leptos::prelude::*;

use crate::components::{KnowledgePage, LogPage, LossRecordForm, PointsPage, RegisterForm};
use crate::config::ClientConfig;
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Input,
    Register,
    Log,
    Points,
    Knowledge,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Input, Page::Register, Page::Log, Page::Points, Page::Knowledge];

    pub fn mount_id(self) -> &'static str {
        match self {
            Page::Input => "input-root",
            Page::Register => "register-root",
            Page::Log => "log-root",
            Page::Points => "points-root",
            Page::Knowledge => "knowledge-root",
        }
    }

    /// First page whose mount point `exists`
    pub fn detect(exists: impl Fn(&str) -> bool) -> Option<Page> {
        Self::ALL.into_iter().find(|page| exists(page.mount_id()))
    }
}

#[component]
pub fn App(page: Page, config: ClientConfig) -> impl IntoView {
    provide_context(AppContext::new(config));
    tracing::info!(?page, "page mounted");

    match page {
        Page::Input => view! { <LossRecordForm /> }.into_any(),
        Page::Register => view! { <RegisterForm /> }.into_any(),
        Page::Log => view! { <LogPage /> }.into_any(),
        Page::Points => view! { <PointsPage /> }.into_any(),
        Page::Knowledge => view! { <KnowledgePage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_page_by_mount_point() {
        assert_eq!(Page::detect(|id| id == "log-root"), Some(Page::Log));
        assert_eq!(Page::detect(|id| id == "knowledge-root"), Some(Page::Knowledge));
        assert_eq!(Page::detect(|_| false), None);
    }
}
