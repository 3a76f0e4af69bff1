//! Client Configuration
//!
//! Fixed UI timings and backend location, optionally overridden by
//! `<meta>` tags in the host page.

use std::time::Duration;

use crate::browser;

/// Meta tag naming the API base URL
pub const META_API_BASE: &str = "api-base";
/// Meta tag naming the console log level
pub const META_LOG_LEVEL: &str = "log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path (empty = same origin)
    pub api_base: String,
    /// How long a toast stays visible
    pub toast_duration: Duration,
    /// Delay before leaving the register page after success
    pub redirect_delay: Duration,
    /// Where registration success navigates to
    pub redirect_target: String,
    /// User id sent with loss records until the session provides one
    pub placeholder_user_id: u32,
    /// Knowledge filter value that shows every category
    pub all_filter: String,
    pub log_level: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_duration: Duration::from_secs(3),
            redirect_delay: Duration::from_secs(3),
            redirect_target: "/".to_string(),
            placeholder_user_id: 1,
            all_filter: "全て".to_string(),
            log_level: None,
        }
    }
}

impl ClientConfig {
    /// Defaults plus whatever the page's meta tags override
    pub fn from_document() -> Self {
        Self::default().with_overrides(|name| browser::meta_content(name))
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup(META_API_BASE) {
            self.api_base = base.trim().to_string();
        }
        self.log_level = lookup(META_LOG_LEVEL).map(|level| level.trim().to_string());
        self
    }
}
