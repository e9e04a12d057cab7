//! Fetching documentation pages over HTTP.

use async_trait::async_trait;
use url::Url;

use crate::config::CrawlerOptions;
use crate::errors::{CrawlError, Result};

/// Anything that can turn a URL into the page's HTML.
#[async_trait]
pub trait PageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

/// Fetches pages with a single reqwest client carrying a fixed User-Agent and timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds the client from the crawl options.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(options: &CrawlerOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout);
        if options.no_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// GETs the page. Any non-success status is an error.
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
