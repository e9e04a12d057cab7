//! Rendering crawled pages into one aggregated llms.txt document.

use std::path::Path;

use crate::config::DocumentTemplate;
use crate::errors::{CrawlError, Result};
use crate::page::PageRecord;
use crate::text_utils::describe;

/// Renders the full llms.txt document.
///
/// Layout, in order: H1 title, blockquote summary, `## Overview`, `## Core Documentation`
/// (one link per page with content) and `## Full Documentation Content` (every page with
/// content, its code examples fenced, each section closed by `---`). Records with empty
/// content appear in neither list.
pub fn render(template: &DocumentTemplate, records: &[PageRecord]) -> String {
    let mut output = String::new();

    write_header(&mut output, template);
    write_index(&mut output, records);
    write_full_content(&mut output, template, records);

    output
}

fn write_header(output: &mut String, template: &DocumentTemplate) {
    output.push_str(&format!("# {}\n\n", template.title));
    output.push_str(&format!("> {}\n\n", template.summary));

    output.push_str("## Overview\n\n");
    output.push_str("This documentation covers:\n");
    for item in &template.overview {
        output.push_str(&format!("- {}\n", item));
    }
    output.push('\n');
}

fn write_index(output: &mut String, records: &[PageRecord]) {
    output.push_str("## Core Documentation\n\n");

    for record in records.iter().filter(|r| r.has_content()) {
        output.push_str(&format!(
            "- [{}]({}): {}\n",
            record.title,
            record.url,
            describe(&record.content)
        ));
    }
}

fn write_full_content(output: &mut String, template: &DocumentTemplate, records: &[PageRecord]) {
    output.push_str("\n## Full Documentation Content\n\n");

    for record in records.iter().filter(|r| r.has_content()) {
        output.push_str(&format!("### {}\n", record.title));
        output.push_str(&format!("Source: {}\n\n", record.url));
        output.push_str(&record.content);
        output.push_str("\n\n");

        if !record.code_blocks.is_empty() {
            output.push_str("#### Code Examples\n\n");
            for code in &record.code_blocks {
                output.push_str(&format!("```{}\n{}\n```\n\n", template.code_language, code));
            }
        }

        output.push_str("---\n\n");
    }
}

/// Renders the document and overwrites `path` with it.
///
/// # Errors
///
/// `OutputWrite` when the file cannot be created or written.
pub fn write_llms_txt(path: &Path, template: &DocumentTemplate, records: &[PageRecord]) -> Result<()> {
    let document = render(template, records);
    std::fs::write(path, document).map_err(|source| CrawlError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn record(url: &str, title: &str, content: &str, code_blocks: &[&str]) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            code_blocks: code_blocks.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn small_template() -> DocumentTemplate {
        DocumentTemplate {
            title: "Test Docs".to_string(),
            summary: "Docs used in tests.".to_string(),
            overview: vec!["One".to_string(), "Two".to_string()],
            code_language: "sql".to_string(),
        }
    }

    #[test]
    fn test_render_full_layout() {
        let records = vec![
            record(
                "https://a.example/select",
                "SELECT",
                "Queries rows.",
                &["SELECT * FROM t;", "SELECT 1 FROM dual;"],
            ),
            record("https://a.example/down", "Error crawling https://a.example/down", "", &[]),
            record("https://a.example/about", "About", "Plain prose.", &[]),
        ];

        let expected = indoc! {"
            # Test Docs

            > Docs used in tests.

            ## Overview

            This documentation covers:
            - One
            - Two

            ## Core Documentation

            - [SELECT](https://a.example/select): Queries rows.
            - [About](https://a.example/about): Plain prose.

            ## Full Documentation Content

            ### SELECT
            Source: https://a.example/select

            Queries rows.

            #### Code Examples

            ```sql
            SELECT * FROM t;
            ```

            ```sql
            SELECT 1 FROM dual;
            ```

            ---

            ### About
            Source: https://a.example/about

            Plain prose.

            ---

        "};

        assert_eq!(render(&small_template(), &records), expected);
    }

    #[test]
    fn test_render_default_header() {
        let output = render(&DocumentTemplate::default(), &[]);
        assert!(output.starts_with("# Confluent Cloud Flink SQL Documentation\n\n> Comprehensive documentation"));
        assert!(output.contains("## Overview\n\nThis documentation covers:\n- Flink SQL syntax and semantics\n"));
        assert!(output.contains("- Best practices and examples\n\n## Core Documentation\n\n"));
        assert!(output.ends_with("\n## Full Documentation Content\n\n"));
    }

    #[test]
    fn test_sections_each_written_once_in_order() {
        let records = vec![record("https://a.example/x", "X", "Body.", &["SELECT 42 AS answer;"])];
        let output = render(&small_template(), &records);

        let headings = [
            "# Test Docs\n",
            "## Overview\n",
            "## Core Documentation\n",
            "## Full Documentation Content\n",
            "### X\n",
            "#### Code Examples\n",
        ];
        let positions: Vec<_> = headings
            .iter()
            .map(|h| {
                assert_eq!(output.matches(h).count(), 1, "{h:?} in {output}");
                output.find(h).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_empty_content_never_rendered() {
        let records = vec![record("https://a.example/fail", "Error crawling https://a.example/fail", "", &[
            "SELECT not_rendered;",
        ])];

        let output = render(&small_template(), &records);
        assert!(!output.contains("https://a.example/fail"));
        assert!(!output.contains("not_rendered"));
        assert!(!output.contains("---"));
    }

    #[test]
    fn test_index_description_truncation() {
        let long = "a".repeat(250);
        let short = "b".repeat(150);
        let records = vec![
            record("https://a.example/long", "Long", &long, &[]),
            record("https://a.example/short", "Short", &short, &[]),
        ];

        let output = render(&small_template(), &records);
        assert!(output.contains(&format!("- [Long](https://a.example/long): {}...\n", "a".repeat(200))));
        assert!(output.contains(&format!("- [Short](https://a.example/short): {}\n", short)));
        // Full content is never truncated.
        assert!(output.contains(&format!("\n{long}\n\n")));
    }

    #[test]
    fn test_code_blocks_fenced_verbatim() {
        let code = "SELECT a,\n       b\nFROM t;";
        let records = vec![record("https://a.example/q", "Q", "text", &[code])];

        let output = render(&small_template(), &records);
        assert!(output.contains(&format!("```sql\n{code}\n```\n\n")));
    }

    #[test]
    fn test_write_llms_txt_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llms.txt");
        std::fs::write(&path, "stale content that must disappear").unwrap();

        let records = vec![record("https://a.example/x", "X", "Fresh.", &[])];
        write_llms_txt(&path, &small_template(), &records).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&small_template(), &records));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_write_llms_txt_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("llms.txt");

        match write_llms_txt(&path, &small_template(), &[]) {
            Err(CrawlError::OutputWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected OutputWrite, got {other:?}"),
        }
    }
}
