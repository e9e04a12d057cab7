//! Sequential crawl of the link list and the end-to-end run.

use std::time::Duration;

use crate::config::CrawlerOptions;
use crate::errors::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::generator::write_llms_txt;
use crate::html::extract_html;
use crate::links::load_links;
use crate::page::PageRecord;

/// Fetches `url` and extracts its record. Fetch failures are returned, not swallowed.
pub async fn extract_page<F: PageFetcher>(fetcher: &F, url: &str) -> Result<PageRecord> {
    let html = fetcher.fetch_html(url).await?;
    Ok(extract_html(url, &html))
}

/// Crawls URLs one at a time, pausing a fixed delay between fetches.
pub struct Crawler<F> {
    fetcher: F,
    delay: Duration,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F, delay: Duration) -> Self {
        Self { fetcher, delay }
    }

    /// The fetcher driving this crawl, e.g. to inspect a mock's request log.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Produces exactly one record per URL, in input order.
    ///
    /// A URL that fails to fetch gets a `PageRecord::failed` placeholder and the crawl
    /// moves on to the next one.
    pub async fn crawl_all(&self, urls: &[String]) -> Vec<PageRecord> {
        let total = urls.len();
        let mut records = Vec::with_capacity(total);

        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }

            tracing::info!("Crawling ({}/{}): {}", i + 1, total, url);
            let record = match extract_page(&self.fetcher, url).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::error!("Error crawling {}: {}", url, e);
                    PageRecord::failed(url)
                }
            };
            records.push(record);
        }

        records
    }
}

/// Loads the links, crawls them with `fetcher` and writes the llms.txt file.
///
/// # Errors
///
/// Only fatal errors are returned: a missing or unreadable links file (before any fetch),
/// or a failed write of the output file.
pub async fn run_with<F: PageFetcher>(options: &CrawlerOptions, fetcher: F) -> Result<Vec<PageRecord>> {
    let links = load_links(&options.links_file)?;
    tracing::info!("Found {} links to crawl", links.len());

    let crawler = Crawler::new(fetcher, options.delay);
    let records = crawler.crawl_all(&links).await;

    write_llms_txt(&options.output_file, &options.template, &records)?;
    Ok(records)
}

/// Runs the whole pipeline over HTTP.
pub async fn run(options: &CrawlerOptions) -> Result<()> {
    tracing::info!("Starting documentation crawler");
    let fetcher = HttpFetcher::new(options)?;
    run_with(options, fetcher).await?;
    tracing::info!("Crawling completed successfully!");
    Ok(())
}
