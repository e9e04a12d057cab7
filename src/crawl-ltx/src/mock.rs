//! Mock page fetcher for testing
//!
//! This module provides a mock implementation of the `PageFetcher` trait
//! that serves predefined HTML per URL, or fails for chosen URLs,
//! without making real network calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::errors::{CrawlError, Result};
use crate::fetch::PageFetcher;

/// Mock page fetcher for testing
///
/// Can be configured to:
/// - Serve specific HTML for specific URLs
/// - Serve a default page for any other URL
/// - Simulate a failed fetch for chosen URLs
///
/// Every requested URL is recorded, in request order.
pub struct MockFetcher {
    /// Exact URL to HTML
    pages: HashMap<String, String>,
    /// Served when the URL has no page of its own
    default_page: Option<String>,
    /// URLs that always fail
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher: every fetch fails with a 404.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            default_page: None,
            failing: HashSet::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that serves the given HTML for every URL
    pub fn with_default(html: &str) -> Self {
        let mut fetcher = Self::new();
        fetcher.default_page = Some(html.to_string());
        fetcher
    }

    /// Create a mock with multiple configured (url, html) pages
    pub fn with_pages(pages: Vec<(&str, &str)>) -> Self {
        let mut fetcher = Self::new();
        for (url, html) in pages {
            fetcher.add_page(url, html);
        }
        fetcher
    }

    /// Serve `html` for `url`
    pub fn add_page(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    /// Make every fetch of `url` fail as if the server were unavailable
    pub fn add_failure(&mut self, url: &str) {
        self.failing.insert(url.to_string());
    }

    /// URLs fetched so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        if self.failing.contains(url) {
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status: 503,
            });
        }

        if let Some(html) = self.pages.get(url).or(self.default_page.as_ref()) {
            return Ok(html.clone());
        }

        Err(CrawlError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}

//
// Test Fixtures
//

/// A documentation page with boilerplate around a `<main>` region holding one SQL example.
pub fn sample_docs_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>  CREATE TABLE Statement  </title>
    <script>window.analytics = {};</script>
    <style>body { margin: 0; }</style>
</head>
<body>
    <header>
        <h1>Site Header</h1>
        <nav>
            <ul>
                <li><a href="/">Home</a></li>
                <li><a href="/docs">Docs</a></li>
            </ul>
        </nav>
    </header>
    <main>
        <h2>CREATE TABLE</h2>
        <p>Creates a new table
           in the current catalog.</p>
        <pre>SELECT * FROM orders;</pre>
        <p>Use <code>LIKE</code> to copy a schema.</p>
    </main>
    <footer>
        <p>&copy; 2024 Docs Inc.</p>
    </footer>
</body>
</html>
"#
}

/// A page with no `<title>` and no recognised content container.
pub fn sample_untitled_html() -> &'static str {
    r#"<html>
<body>
    <div class="wrapper">
        <p>Plain body text.</p>
    </div>
</body>
</html>
"#
}

/// Minimal page with an empty body
pub fn sample_empty_html() -> &'static str {
    r#"<!DOCTYPE html>
<html>
<head><title>Empty</title></head>
<body></body>
</html>
"#
}
