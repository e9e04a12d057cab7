/// What was extracted from one crawled URL.
///
/// An empty `content` means the page produced nothing usable: it failed to fetch, had no
/// body, or its body had no text. Such records are kept in memory but never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    /// Normalized plain text of the page's content region.
    pub content: String,
    /// Code fragments from the content region, in document order.
    pub code_blocks: Vec<String>,
}

impl PageRecord {
    /// Placeholder for a URL whose fetch failed.
    pub fn failed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: format!("Error crawling {url}"),
            content: String::new(),
            code_blocks: Vec::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
