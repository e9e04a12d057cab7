//! HTML content extraction: title, main text and code samples of a documentation page.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::errors::{CrawlError, Result};
use crate::page::PageRecord;
use crate::text_utils::normalize;

/// Elements removed before any text is read.
pub const STRIPPED_ELEMENTS: &str = "script, style, nav, header, footer";

/// Content containers, most specific first. `body` is the fallback when none match.
pub const CONTENT_SELECTORS: [&str; 8] = [
    "main",
    "article",
    ".content",
    "#content",
    ".main-content",
    ".documentation",
    ".docs-content",
    ".page-content",
];

/// Code fragments at or under this many characters (after trimming) are dropped.
pub const MIN_CODE_BLOCK_LEN: usize = 10;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::HtmlParseError(format!("invalid selector '{css}': {e}")))
}

/// Parses `html` and extracts its record.
///
/// # Examples
///
/// ```
/// # use crawl_ltx::extract_html;
/// let html = r#"<html><head><title>Intro</title></head><body><main>Hello   world</main></body></html>"#;
/// let record = extract_html("https://a.example/intro", html);
/// assert_eq!(record.title, "Intro");
/// assert_eq!(record.content, "Hello world");
/// ```
pub fn extract_html(url: &str, html: &str) -> PageRecord {
    let mut document = Html::parse_document(html);
    extract(url, &mut document)
}

/// Extracts the record of an already parsed page. Boilerplate elements are removed from
/// `document` in place.
///
/// Never fails: a page without a content region yields an empty `content`.
pub fn extract(url: &str, document: &mut Html) -> PageRecord {
    strip_boilerplate(document);

    let title = get_title(document).unwrap_or_else(|| url_path(url));

    let Some(region) = select_content_region(document) else {
        tracing::debug!("No content region in {}", url);
        return PageRecord {
            url: url.to_string(),
            title,
            content: String::new(),
            code_blocks: Vec::new(),
        };
    };

    let content = normalize(&region.text().collect::<String>());
    let code_blocks = extract_code_blocks(region);
    tracing::debug!(
        "Extracted {} chars and {} code blocks from {}",
        content.chars().count(),
        code_blocks.len(),
        url
    );

    PageRecord {
        url: url.to_string(),
        title,
        content,
        code_blocks,
    }
}

/// Detaches every `script`, `style`, `nav`, `header` and `footer` element from the tree.
pub fn strip_boilerplate(document: &mut Html) {
    let stripped = match selector(STRIPPED_ELEMENTS) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("{}", e);
            return;
        }
    };

    let ids: Vec<_> = document.select(&stripped).map(|element| element.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Trimmed text of the first `<title>` element, if there is one. An empty title is still a title.
pub fn get_title(document: &Html) -> Option<String> {
    let title = selector("title").ok()?;
    document
        .select(&title)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// The path component of `url`, or the whole string when it doesn't parse as a URL.
fn url_path(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string())
}

/// First element matching the content selectors in priority order, then `<body>`.
pub fn select_content_region(document: &Html) -> Option<ElementRef<'_>> {
    CONTENT_SELECTORS
        .iter()
        .chain(std::iter::once(&"body"))
        .filter_map(|css| match selector(css) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .find_map(|s| document.select(&s).next())
}

/// Trimmed text of every `<pre>` and `<code>` inside `region`, in document order, keeping
/// only fragments longer than `MIN_CODE_BLOCK_LEN` characters. Nested `<pre><code>` yields both.
pub fn extract_code_blocks(region: ElementRef<'_>) -> Vec<String> {
    let Ok(code) = selector("pre, code") else {
        return Vec::new();
    };

    region
        .select(&code)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| text.chars().count() > MIN_CODE_BLOCK_LEN)
        .collect()
}
