//! Knowledge Catalogue
//!
//! Turns the embedded catalogue into renderable entries: unlisted items
//! dropped, Markdown bodies rendered once up front.

use crate::markdown::{excerpt, parse_markdown};
use crate::models::KnowledgeCatalog;

/// Element id of the embedded catalogue
pub const KNOWLEDGE_DATA_ID: &str = "knowledge-data";
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeEntry {
    pub modal_id: String,
    pub category: Option<String>,
    pub title: String,
    pub preview: String,
    pub body_html: String,
}

pub fn entries(catalog: &KnowledgeCatalog) -> Vec<KnowledgeEntry> {
    let entries: Vec<_> = catalog
        .items
        .iter()
        .filter(|item| item.is_listable())
        .map(|item| {
            let content = item.content.as_deref().unwrap_or_default();
            KnowledgeEntry {
                modal_id: item.modal_id(),
                category: item.category.clone(),
                title: item.title.clone().unwrap_or_default(),
                preview: excerpt(content, PREVIEW_CHARS),
                body_html: parse_markdown(content),
            }
        })
        .collect();
    let skipped = catalog.items.len() - entries.len();
    if skipped > 0 {
        tracing::debug!(skipped, "knowledge items without title or content");
    }
    entries
}
