//! Text, category, and aggregated search results

use serde::{Deserialize, Serialize};

use super::TitleMatch;

/// One result of the full-text search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
    /// Article title
    pub title: String,
    /// Article identifier
    pub page_id: i64,
    /// Comma-joined category names, `None` when the article has none
    pub categories: Option<String>,
}

/// One result of the category search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Article title
    pub title: String,
    /// Article identifier
    pub page_id: i64,
}

/// Simplified projection of a search result, used by the aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Article title
    pub title: String,
    /// Article identifier
    pub page_id: i64,
}

impl From<&TitleMatch> for PageRef {
    fn from(article: &TitleMatch) -> Self {
        Self {
            title: article.title.clone(),
            page_id: article.id,
        }
    }
}

impl From<&TextMatch> for PageRef {
    fn from(article: &TextMatch) -> Self {
        Self {
            title: article.title.clone(),
            page_id: article.page_id,
        }
    }
}

impl From<&CategoryMatch> for PageRef {
    fn from(article: &CategoryMatch) -> Self {
        Self {
            title: article.title.clone(),
            page_id: article.page_id,
        }
    }
}

/// Combined results of the title, text, and category searchers
///
/// The three lists are independent; nothing is deduplicated or ranked
/// across sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSearchResults {
    pub title_results: Vec<PageRef>,
    pub text_results: Vec<PageRef>,
    pub category_results: Vec<PageRef>,
}
