//! Loading the list of documentation URLs to crawl.

use std::path::Path;

use crate::errors::{CrawlError, Result};

/// Parses a newline-delimited list of URLs.
///
/// Lines that are empty after trimming are skipped, as are lines starting with `#`.
/// Remaining lines are trimmed. Duplicates are kept.
///
/// # Examples
///
/// ```
/// # use crawl_ltx::parse_links;
/// let links = parse_links("https://a.example/x\n# skip\n\n");
/// assert_eq!(links, vec!["https://a.example/x".to_string()]);
/// ```
pub fn parse_links(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Reads and parses the links file.
///
/// # Errors
///
/// `LinksFileNotFound` when the file doesn't exist, `LinksFileRead` when it can't be read.
pub fn load_links(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(CrawlError::LinksFileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| CrawlError::LinksFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let links = parse_links(&text);
    tracing::debug!("Loaded {} links from {}", links.len(), path.display());
    Ok(links)
}
