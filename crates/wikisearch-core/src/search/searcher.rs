//! Per-snapshot query implementation

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for LIMIT

use crate::error::Result;
use crate::models::{CategoryMatch, Section, TextMatch};
use rusqlite::{params, Connection};

/// Queries against a single open snapshot connection
pub struct SnapshotSearcher<'a> {
    conn: &'a Connection,
}

impl<'a> SnapshotSearcher<'a> {
    /// Create a searcher over the given snapshot connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Articles whose title contains `title`, up to `limit`
    ///
    /// Substring matching uses the snapshot's default collation.
    pub fn articles_matching_title(&self, title: &str, limit: usize) -> Result<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT article_id, title FROM articles
             WHERE title LIKE ?
             LIMIT ?",
        )?;

        let articles = stmt
            .query_map(params![format!("%{title}%"), limit as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(articles)
    }

    /// Sections of an article in stored row order
    ///
    /// With `introduction_only`, returns at most the first section.
    pub fn sections(&self, article_id: i64, introduction_only: bool) -> Result<Vec<Section>> {
        let sql = if introduction_only {
            "SELECT section_title, section_content, wikitables FROM article_sections
             WHERE article_id = ?
             ORDER BY id LIMIT 1"
        } else {
            "SELECT section_title, section_content, wikitables FROM article_sections
             WHERE article_id = ?
             ORDER BY id"
        };

        let mut stmt = self.conn.prepare(sql)?;
        let sections = stmt
            .query_map(params![article_id], |row| {
                Ok(Section {
                    title: row.get(0)?,
                    content: row.get(1)?,
                    wikitables: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sections)
    }

    /// All category names associated with an article
    pub fn categories(&self, article_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.name FROM categories c
             INNER JOIN article_categories ac ON c.category_id = ac.category_id
             WHERE ac.article_id = ?",
        )?;

        let categories = stmt
            .query_map(params![article_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(categories)
    }

    /// Ids of other articles whose title exactly equals `title`
    ///
    /// The article's own id is excluded; a non-empty result means the
    /// article is a redirect.
    pub fn redirect_targets(&self, title: &str, article_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT article_id FROM articles
             WHERE title = ? AND article_id != ?",
        )?;

        let targets = stmt
            .query_map(params![title, article_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(targets)
    }

    /// Distinct articles having at least one section containing `text`
    ///
    /// Category names are concatenated into one comma-joined string per
    /// article.
    pub fn text_matches(&self, text: &str, limit: usize) -> Result<Vec<TextMatch>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.title, a.article_id, GROUP_CONCAT(c.name) AS categories
             FROM articles a
             LEFT JOIN article_categories ac ON a.article_id = ac.article_id
             LEFT JOIN categories c ON ac.category_id = c.category_id
             WHERE a.article_id IN (
                 SELECT article_id
                 FROM article_sections
                 WHERE section_content LIKE ?
             )
             GROUP BY a.article_id
             LIMIT ?",
        )?;

        let matches = stmt
            .query_map(params![format!("%{text}%"), limit as i64], |row| {
                Ok(TextMatch {
                    title: row.get(0)?,
                    page_id: row.get(1)?,
                    categories: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(matches)
    }

    /// `(title, article_id)` pairs of articles belonging to categories
    /// whose name contains `category`
    ///
    /// An article appears once per matching membership, so duplicates
    /// are possible.
    pub fn category_matches(&self, category: &str, limit: usize) -> Result<Vec<CategoryMatch>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.title, a.article_id
             FROM articles a
             JOIN article_categories ac ON a.article_id = ac.article_id
             JOIN categories c ON ac.category_id = c.category_id
             WHERE c.name LIKE ?
             LIMIT ?",
        )?;

        let matches = stmt
            .query_map(params![format!("%{category}%"), limit as i64], |row| {
                Ok(CategoryMatch {
                    title: row.get(0)?,
                    page_id: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(matches)
    }
}
