//! Error types for crawling documentation pages and writing the llms.txt file.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for crawl and generation operations.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The links file does not exist. Fatal: nothing is fetched.
    #[error("Links file not found: {}", .0.display())]
    LinksFileNotFound(PathBuf),

    /// The links file exists but could not be read.
    #[error("Cannot read links file {}: {source}", .path.display())]
    LinksFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed (connection error, timeout, unreadable body).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// HTML parsing error
    #[error("HTML parsing error: {0}")]
    HtmlParseError(String),

    /// The output file could not be created or written. Fatal.
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    /// True for the errors that abort a whole run rather than a single page.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CrawlError::LinksFileNotFound(_) | CrawlError::LinksFileRead { .. } | CrawlError::OutputWrite { .. }
        )
    }
}

/// Type alias for Result with CrawlError
pub type Result<T> = std::result::Result<T, CrawlError>;
