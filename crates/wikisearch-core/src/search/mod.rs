//! Search operations over article snapshots
//!
//! Each operation discovers the snapshots under a directory and runs a
//! synchronous pass over them, one fresh connection per file. `limit`
//! applies per snapshot; results across snapshots are concatenated
//! without deduplication, so K matching snapshots can return up to
//! `K * limit` results.

mod searcher;

pub use searcher::SnapshotSearcher;

use std::path::Path;

use crate::db;
use crate::error::Result;
use crate::models::{CategoryMatch, GeneralSearchResults, PageRef, TextMatch, TitleMatch};

/// Search articles whose title contains `title`
///
/// Per matched article, fetches either the introduction (first section
/// by row order) or every section, plus all category names. Articles
/// whose exact title is shared by other articles are recorded as
/// redirects; once a redirect is recorded, the remaining matches of
/// that snapshot are skipped.
pub fn search_articles_by_title(
    dir: &Path,
    title: &str,
    limit: usize,
    introduction_only: bool,
) -> Result<Vec<TitleMatch>> {
    let snapshots = db::locate_snapshots(dir)?;
    tracing::info!(
        query = title,
        snapshots = snapshots.len(),
        "searching articles by title"
    );

    let mut results = Vec::new();
    for path in &snapshots {
        let conn = db::open_snapshot(path)?;
        let searcher = SnapshotSearcher::new(&conn);

        let articles = searcher.articles_matching_title(title, limit)?;
        tracing::debug!(
            snapshot = %path.display(),
            matches = articles.len(),
            "checked snapshot"
        );

        for (article_id, article_title) in articles {
            tracing::debug!(id = article_id, title = %article_title, "gathering article data");

            let mut article = TitleMatch::new(article_id, article_title);
            article.sections = searcher.sections(article_id, introduction_only)?;
            article.categories = searcher.categories(article_id)?;

            let targets = searcher.redirect_targets(&article.title, article_id)?;
            if targets.is_empty() {
                results.push(article);
            } else {
                if targets.len() > 1 {
                    tracing::warn!(
                        title = %article.title,
                        targets = ?targets,
                        "redirect resolves to multiple articles"
                    );
                }
                article.redirects_to = Some(targets);
                results.push(article);
                // Remaining matches of this snapshot are skipped once a
                // redirect is recorded.
                break;
            }
        }
    }

    Ok(results)
}

/// Search articles having at least one section whose content contains
/// `text`
///
/// Categories are returned as one comma-joined string per article.
pub fn search_articles_by_text(dir: &Path, text: &str, limit: usize) -> Result<Vec<TextMatch>> {
    let snapshots = db::locate_snapshots(dir)?;
    tracing::info!(
        query = text,
        snapshots = snapshots.len(),
        "searching articles by text"
    );

    let mut results = Vec::new();
    for path in &snapshots {
        let conn = db::open_snapshot(path)?;
        let searcher = SnapshotSearcher::new(&conn);
        results.extend(searcher.text_matches(text, limit)?);
    }

    Ok(results)
}

/// Search articles belonging to categories whose name contains
/// `category`
pub fn search_articles_by_category(
    dir: &Path,
    category: &str,
    limit: usize,
) -> Result<Vec<CategoryMatch>> {
    let snapshots = db::locate_snapshots(dir)?;
    tracing::info!(
        query = category,
        snapshots = snapshots.len(),
        "searching articles by category"
    );

    let mut results = Vec::new();
    for path in &snapshots {
        tracing::debug!(snapshot = %path.display(), "checking snapshot");
        let conn = db::open_snapshot(path)?;
        let searcher = SnapshotSearcher::new(&conn);
        results.extend(searcher.category_matches(category, limit)?);
    }

    Ok(results)
}

/// Run the title, text, and category searchers with the same query
///
/// Each raw result list is projected to `(title, page_id)` pairs. No
/// deduplication or ranking happens across the three sources.
pub fn general_search(dir: &Path, query: &str, limit: usize) -> Result<GeneralSearchResults> {
    let title_results = search_articles_by_title(dir, query, limit, true)?;
    let text_results = search_articles_by_text(dir, query, limit)?;
    let category_results = search_articles_by_category(dir, query, limit)?;

    Ok(GeneralSearchResults {
        title_results: title_results.iter().map(PageRef::from).collect(),
        text_results: text_results.iter().map(PageRef::from).collect(),
        category_results: category_results.iter().map(PageRef::from).collect(),
    })
}
