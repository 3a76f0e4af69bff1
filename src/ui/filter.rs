//! Category Filter

/// Exactly one active filter; the sentinel shows every item
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    sentinel: String,
    active: String,
}

impl CategoryFilter {
    /// Starts on the sentinel, like clicking the first button on load
    pub fn new(sentinel: impl Into<String>) -> Self {
        let sentinel = sentinel.into();
        Self { active: sentinel.clone(), sentinel }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, filter: &str) {
        self.active = filter.to_string();
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    /// Whether an item with `category` passes the active filter
    pub fn shows(&self, category: Option<&str>) -> bool {
        self.active == self.sentinel || category == Some(self.active.as_str())
    }

    /// Button values in display order: sentinel first, then categories
    pub fn buttons(&self, categories: &[String]) -> Vec<String> {
        std::iter::once(self.sentinel.clone())
            .chain(categories.iter().filter(|c| **c != self.sentinel).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_shows_everything() {
        let filter = CategoryFilter::new("全て");
        assert!(filter.shows(Some("保存")));
        assert!(filter.shows(None));
    }

    #[test]
    fn test_category_filter_hides_others() {
        let mut filter = CategoryFilter::new("全て");
        filter.select("保存");
        assert!(filter.shows(Some("保存")));
        assert!(!filter.shows(Some("調理")));
        assert!(!filter.shows(None));
        assert!(filter.is_active("保存"));
        assert!(!filter.is_active("全て"));
    }

    #[test]
    fn test_buttons_order() {
        let filter = CategoryFilter::new("全て");
        let categories = vec!["保存".to_string(), "調理".to_string()];
        assert_eq!(filter.buttons(&categories), vec!["全て", "保存", "調理"]);
    }
}
