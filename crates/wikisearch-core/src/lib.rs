//! wikisearch-core - Core library for wikisearch
//!
//! This crate contains the shared models, snapshot discovery, and the
//! search operations used by the wikisearch interfaces.

pub mod db;
pub mod error;
pub mod models;
pub mod search;

pub use error::{Error, Result};
pub use models::{GeneralSearchResults, TitleMatch};
