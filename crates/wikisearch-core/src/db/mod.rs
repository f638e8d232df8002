//! Snapshot database layer for wikisearch

mod snapshot;

pub use snapshot::{locate_snapshots, open_snapshot, SNAPSHOT_EXTENSION, SNAPSHOT_PREFIX};
