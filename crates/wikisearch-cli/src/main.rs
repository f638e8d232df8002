//! wikisearch CLI - Search local Wikipedia article snapshots
//!
//! Runs the title-search path against the `wikipedia_*.db` snapshots in
//! the current working directory and dumps the results as JSON.

use std::env;
use std::io;
use std::path::Path;

use clap::Parser;
use thiserror::Error;
use wikisearch_core::search::search_articles_by_title;
use wikisearch_core::TitleMatch;

/// Default number of results per snapshot
const DEFAULT_LIMIT: usize = 20;

#[derive(Parser)]
#[command(name = "wikisearch")]
#[command(about = "Search Wikipedia article snapshots by title")]
#[command(version)]
struct Cli {
    /// Search query for article titles
    query: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] wikisearch_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikisearch_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let query = normalize_search_query(&cli.query)?;

    let snapshot_dir = env::current_dir()?;
    let rendered = run_title_search(&snapshot_dir, &query)?;
    println!("{rendered}");

    Ok(())
}

/// Run the title search with defaults and render the results
fn run_title_search(snapshot_dir: &Path, query: &str) -> Result<String, CliError> {
    let results = search_articles_by_title(snapshot_dir, query, DEFAULT_LIMIT, true)?;
    render_results(&results)
}

fn render_results(results: &[TitleMatch]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(results)?)
}

fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rusqlite::{params, Connection};
    use tempfile::tempdir;
    use wikisearch_core::TitleMatch;

    use super::{normalize_search_query, render_results, run_title_search, CliError};

    #[test]
    fn normalize_search_query_trims_and_rejects_empty() {
        assert_eq!(normalize_search_query("  Cat  ").unwrap(), "Cat");
        assert!(matches!(
            normalize_search_query(" \n\t "),
            Err(CliError::EmptySearchQuery)
        ));
    }

    #[test]
    fn render_results_is_pretty_json() {
        let results = vec![TitleMatch::new(1, "Cat".to_string())];
        let rendered = render_results(&results).unwrap();

        assert!(rendered.contains("\"id\": 1"));
        assert!(rendered.contains("\"title\": \"Cat\""));
        assert!(rendered.contains("\"redirects_to\": null"));

        let parsed: Vec<TitleMatch> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn render_results_empty_list() {
        assert_eq!(render_results(&[]).unwrap(), "[]");
    }

    #[test]
    fn run_title_search_dumps_snapshot_matches() {
        let dir = tempdir().unwrap();
        let conn = Connection::open(dir.path().join("wikipedia_en.db")).unwrap();
        conn.execute_batch(
            "CREATE TABLE articles (article_id INTEGER PRIMARY KEY, title TEXT NOT NULL);
             CREATE TABLE article_sections (
                 id INTEGER PRIMARY KEY,
                 article_id INTEGER NOT NULL,
                 section_title TEXT,
                 section_content TEXT,
                 wikitables TEXT
             );
             CREATE TABLE categories (category_id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             CREATE TABLE article_categories (article_id INTEGER NOT NULL, category_id INTEGER NOT NULL);",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO articles (article_id, title) VALUES (?, ?)",
            params![1, "Cat"],
        )
        .unwrap();

        let rendered = run_title_search(dir.path(), "Cat").unwrap();
        let parsed: Vec<TitleMatch> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Cat");
        assert_eq!(parsed[0].categories, Vec::<String>::new());
    }

    #[test]
    fn run_title_search_empty_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(run_title_search(dir.path(), "Cat").unwrap(), "[]");
    }
}
