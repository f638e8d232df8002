//! Article and section models

use serde::{Deserialize, Serialize};

/// A titled sub-block of an article's content
///
/// Sections are stored in row order; the first section of an article is
/// treated as its introduction. All columns are nullable in real
/// snapshots, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: Option<String>,
    /// Section body text
    pub content: Option<String>,
    /// Tabular data extracted from the section, if any
    pub wikitables: Option<String>,
}

/// One result of the title search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMatch {
    /// Article identifier, assigned by the snapshot
    pub id: i64,
    /// Article title
    pub title: String,
    /// Introduction only, or every section in stored row order
    pub sections: Vec<Section>,
    /// Category names; empty when the article has none
    pub categories: Vec<String>,
    /// Ids of other articles sharing this exact title, `None` when the
    /// article is not a redirect
    pub redirects_to: Option<Vec<i64>>,
}

impl TitleMatch {
    /// Create a match with no sections, categories, or redirect targets
    #[must_use]
    pub const fn new(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            sections: Vec::new(),
            categories: Vec::new(),
            redirects_to: None,
        }
    }

    /// Whether this article aliases another article's canonical content
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        self.redirects_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_empty() {
        let article = TitleMatch::new(7, "Cat".to_string());
        assert_eq!(article.id, 7);
        assert_eq!(article.title, "Cat");
        assert!(article.sections.is_empty());
        assert!(article.categories.is_empty());
        assert!(!article.is_redirect());
    }

    #[test]
    fn test_redirect_flag() {
        let mut article = TitleMatch::new(1, "Kitty".to_string());
        article.redirects_to = Some(vec![2]);
        assert!(article.is_redirect());
    }

    #[test]
    fn test_serde_round_trip() {
        let article = TitleMatch {
            id: 1,
            title: "Cat".to_string(),
            sections: vec![Section {
                title: Some("Intro".to_string()),
                content: Some("Cats are mammals...".to_string()),
                wikitables: None,
            }],
            categories: vec!["Animals".to_string()],
            redirects_to: None,
        };

        let json = serde_json::to_string(&article).unwrap();
        let parsed: TitleMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, article);
    }
}
