//! Text manipulation utilities.

use std::sync::LazyLock;

use regex::Regex;

/// Length, in characters, of the index description taken from a page's content.
pub const DESCRIPTION_LEN: usize = 200;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

/// Collapses every whitespace run to one space, then blank-line runs to one newline, then trims.
///
/// Idempotent.
///
/// # Examples
///
/// ```
/// # use crawl_ltx::text_utils::normalize;
/// assert_eq!(normalize("  Hello\n\n\t world  "), "Hello world");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let collapsed = BLANK_LINES.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}

/// Builds the short description shown next to a page link in the index.
///
/// Takes the first 200 characters, replaces newlines with spaces and trims. When the raw
/// slice is a full 200 characters `...` is appended, even if the content ends right there.
///
/// # Examples
///
/// ```
/// # use crawl_ltx::text_utils::describe;
/// assert_eq!(describe("Short page."), "Short page.");
/// assert_eq!(describe(&"a".repeat(250)), format!("{}...", "a".repeat(200)));
/// ```
pub fn describe(content: &str) -> String {
    let slice: String = content.chars().take(DESCRIPTION_LEN).collect();
    let truncated = slice.chars().count() == DESCRIPTION_LEN;

    let mut description = slice.replace('\n', " ").trim().to_string();
    if truncated {
        description.push_str("...");
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a  b\tc\n\nd"), "a b c d");
        assert_eq!(normalize("\n\n  leading and trailing \n "), "leading and trailing");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in [
            "",
            "plain",
            "  many   spaces  ",
            "lines\n\n\nand\r\n\r\nmore lines",
            "\u{3000}ideographic\u{3000}space",
            "tabs\t\tand\u{0B}vertical",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_describe_long_content() {
        let content = "x".repeat(250);
        let description = describe(&content);
        assert_eq!(description, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_describe_short_content() {
        let content = "y".repeat(150);
        assert_eq!(describe(&content), content);
    }

    #[test]
    fn test_describe_exactly_200_gets_ellipsis() {
        let content = "z".repeat(200);
        assert_eq!(describe(&content), format!("{content}..."));
    }

    #[test]
    fn test_describe_replaces_newlines_and_trims() {
        assert_eq!(describe("first\nsecond\n"), "first second");
    }

    #[test]
    fn test_describe_trailing_space_in_slice() {
        // The slice is a full 200 chars, so the ellipsis follows the trimmed text.
        let content = format!("{} tail", "w".repeat(199));
        assert_eq!(describe(&content), format!("{}...", "w".repeat(199)));
    }

    #[test]
    fn test_describe_counts_characters_not_bytes() {
        let content = "é".repeat(250);
        assert_eq!(describe(&content), format!("{}...", "é".repeat(200)));
    }
}
