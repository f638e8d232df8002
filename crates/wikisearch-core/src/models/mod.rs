//! Data models for wikisearch

mod article;
mod results;

pub use article::{Section, TitleMatch};
pub use results::{CategoryMatch, GeneralSearchResults, PageRef, TextMatch};
