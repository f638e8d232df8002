//! Snapshot discovery and connection management
//!
//! Snapshots are self-contained `SQLite` files produced by an external
//! ingestion process. This crate never creates or mutates them; the
//! expected schema is `articles(article_id, title)`,
//! `article_sections(id, article_id, section_title, section_content,
//! wikitables)`, `categories(category_id, name)`, and
//! `article_categories(article_id, category_id)`.

use crate::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix identifying an article snapshot
pub const SNAPSHOT_PREFIX: &str = "wikipedia_";

/// Filename extension identifying an article snapshot
pub const SNAPSHOT_EXTENSION: &str = "db";

/// Discover all article snapshots in `dir`
///
/// Matches files named `wikipedia_*.db`. The result order is
/// directory-iteration order and is not guaranteed stable. A directory
/// with no matching files yields an empty list.
pub fn locate_snapshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut snapshots = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_snapshot = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(SNAPSHOT_PREFIX))
            && path
                .extension()
                .is_some_and(|extension| extension == SNAPSHOT_EXTENSION);

        if is_snapshot {
            snapshots.push(path);
        }
    }

    tracing::debug!(count = snapshots.len(), "discovered article snapshots");
    Ok(snapshots)
}

/// Open a snapshot read-only
///
/// Snapshots are owned by the ingestion process, so connections never
/// get write access.
pub fn open_snapshot(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}
