use std::path::PathBuf;

use clap::Parser;
use crawl_ltx::{CrawlerOptions, DEFAULT_LINKS_FILE, DEFAULT_LOG_SETTINGS, DEFAULT_OUTPUT_FILE, run, setup_logging};

#[derive(Parser)]
#[command(name = "crawl-ltx")]
#[command(about = "Crawls a list of documentation pages into a single llms.txt", long_about = None)]
struct CrawlCli {
    /// File listing the URLs to crawl, one per line. Lines starting with '#' are ignored.
    #[arg(short, long, default_value = DEFAULT_LINKS_FILE)]
    links: PathBuf,

    /// Output file path for the generated llms.txt. Overwritten if it exists.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE, value_parser = validate_output_file)]
    output: PathBuf,
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    setup_logging(DEFAULT_LOG_SETTINGS);

    let cli = CrawlCli::parse();
    let options = CrawlerOptions::builder()
        .links_file(cli.links)
        .output_file(cli.output)
        .build();

    if let Err(e) = run(&options).await {
        if e.is_fatal() {
            tracing::error!("Aborting crawl: {}", e);
        } else {
            tracing::error!("Error: {}", e);
        }
        std::process::exit(1)
    }
}
