//! # Documentation crawler for llms.txt
//!
//! Fetches a fixed list of documentation pages, extracts their readable text and code
//! samples, and aggregates everything into one llms.txt file: H1 title, blockquote summary,
//! overview, an index of links, then the full content of every page.
//!
//! ## Example
//!
//! ```no_run
//! use crawl_ltx::{CrawlerOptions, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = CrawlerOptions::builder()
//!         .links_file("links.txt")
//!         .output_file("llms.txt")
//!         .build();
//!
//!     run(&options).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod crawl;
mod errors;
mod fetch;
mod generator;
mod html;
mod links;
mod logging;
// Make the mock fetcher available for tests in this crate and the integration tests
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
mod page;
pub mod text_utils;

// Public API re-exports
pub use config::{
    CrawlerOptions, CrawlerOptionsBuilder, DEFAULT_DELAY, DEFAULT_LINKS_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT, DocumentTemplate,
};
pub use crawl::{Crawler, extract_page, run, run_with};
pub use errors::{CrawlError, Result};
pub use fetch::{HttpFetcher, PageFetcher};
pub use generator::{render, write_llms_txt};
pub use html::{
    CONTENT_SELECTORS, MIN_CODE_BLOCK_LEN, extract, extract_code_blocks, extract_html, get_title,
    select_content_region, strip_boilerplate,
};
pub use links::{load_links, parse_links};
pub use logging::{DEFAULT_LOG_SETTINGS, setup_logging};
pub use page::PageRecord;
