//! Configuration options for a crawl run and the generated document.

use std::path::PathBuf;
use std::time::Duration;

/// Default location of the newline-delimited list of URLs.
pub const DEFAULT_LINKS_FILE: &str = "links.txt";

/// Default location of the generated llms.txt file.
pub const DEFAULT_OUTPUT_FILE: &str = "llms.txt";

/// Fixed pause between two successive fetches.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Upper bound on a single page fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// The fixed text surrounding the per-page sections of the generated llms.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    /// H1 line.
    pub title: String,
    /// Blockquote line under the title.
    pub summary: String,
    /// Bullets of the "## Overview" section.
    pub overview: Vec<String>,
    /// Language tag on every fenced code example.
    pub code_language: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            title: "Confluent Cloud Flink SQL Documentation".to_string(),
            summary: "Comprehensive documentation for Apache Flink SQL dialect used in Confluent Cloud. \
                      This includes SQL syntax, functions, operators, and best practices for stream processing \
                      with Flink SQL in Confluent Cloud."
                .to_string(),
            overview: vec![
                "Flink SQL syntax and semantics".to_string(),
                "Built-in functions and operators".to_string(),
                "Stream processing concepts".to_string(),
                "Confluent Cloud specific features".to_string(),
                "Best practices and examples".to_string(),
            ],
            code_language: "sql".to_string(),
        }
    }
}

/// Configuration options for the crawler.
#[derive(Debug, Clone)]
pub struct CrawlerOptions {
    /// File listing one URL per line.
    pub links_file: PathBuf,
    /// Destination of the generated document. Overwritten on every run.
    pub output_file: PathBuf,
    /// Pause between successive fetches (default: 1s)
    pub delay: Duration,
    /// Per-request timeout (default: 30s)
    pub timeout: Duration,
    /// Value of the User-Agent header sent with every request
    pub user_agent: String,
    /// Ignore any proxy configured through the environment (default: false)
    pub no_proxy: bool,
    /// Fixed text of the generated document.
    pub template: DocumentTemplate,
}

impl Default for CrawlerOptions {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from(DEFAULT_LINKS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            no_proxy: false,
            template: DocumentTemplate::default(),
        }
    }
}

impl CrawlerOptions {
    /// Creates a new builder for CrawlerOptions.
    pub fn builder() -> CrawlerOptionsBuilder {
        CrawlerOptionsBuilder::default()
    }
}

/// Builder for CrawlerOptions. Unset fields take the defaults above.
#[derive(Debug, Clone, Default)]
pub struct CrawlerOptionsBuilder {
    links_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    delay: Option<Duration>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    no_proxy: bool,
    template: Option<DocumentTemplate>,
}

impl CrawlerOptionsBuilder {
    /// Sets the file the URLs are read from.
    pub fn links_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.links_file = Some(path.into());
        self
    }

    /// Sets the file the llms.txt document is written to.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the pause between successive fetches.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Connects directly, bypassing `HTTP_PROXY` and friends.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Replaces the document header, overview and code fence language.
    pub fn template(mut self, template: DocumentTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Builds the CrawlerOptions.
    pub fn build(self) -> CrawlerOptions {
        CrawlerOptions {
            links_file: self.links_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LINKS_FILE)),
            output_file: self.output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            delay: self.delay.unwrap_or(DEFAULT_DELAY),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            no_proxy: self.no_proxy,
            template: self.template.unwrap_or_default(),
        }
    }
}
