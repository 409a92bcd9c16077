use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use searxng_client::SearxClient;

use crate::extract::clean_page_text;

// --- PageScraper trait ---

#[async_trait]
pub trait PageScraper: Send + Sync {
    /// Render a URL and return its de-duplicated visible text. An empty
    /// string means "nothing to save", not a failure.
    async fn scrape(&self, url: &str) -> Result<String>;
    fn name(&self) -> &str;
}

// --- Headless Chromium scraper ---

/// Load bound for a single Chromium invocation.
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Scraper that renders pages with headless Chromium `--dump-dom`, then strips
/// the DOM down to de-duplicated text lines. Each call launches its own
/// browser process against a throwaway profile directory, so the session is
/// released on every exit path.
pub struct ChromeScraper {
    chrome_bin: String,
}

impl ChromeScraper {
    pub fn new(chrome_bin: &str) -> Self {
        info!(chrome_bin, "Using ChromeScraper (dump-dom)");
        Self {
            chrome_bin: chrome_bin.to_string(),
        }
    }

    /// Launch Chromium `--dump-dom` and return raw stdout bytes. A rendering
    /// failure inside the browser yields empty bytes; launch failures and
    /// timeouts are errors for the caller to handle.
    async fn run_chrome(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = url::Url::parse(url).context("Invalid URL")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("Only http/https URLs are allowed, got: {}", parsed.scheme());
        }

        let tmp_dir = tempfile::tempdir().context("Failed to create temp profile dir")?;

        let result = tokio::time::timeout(
            PAGE_LOAD_TIMEOUT,
            tokio::process::Command::new(&self.chrome_bin)
                .args([
                    "--headless",
                    "--no-sandbox",
                    "--disable-gpu",
                    "--disable-dev-shm-usage",
                    &format!("--user-data-dir={}", tmp_dir.path().display()),
                    "--dump-dom",
                    url,
                ])
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) => {
                if output.status.success() {
                    return Ok(output.stdout);
                }
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!(url, scraper = "chrome", stderr = %stderr, "Chrome exited with error");
                Ok(Vec::new())
            }
            Ok(Err(e)) => anyhow::bail!("Failed to run Chrome for {url}: {e}"),
            Err(_) => anyhow::bail!(
                "Chrome timed out after {}s for {url}",
                PAGE_LOAD_TIMEOUT.as_secs()
            ),
        }
    }
}

#[async_trait]
impl PageScraper for ChromeScraper {
    async fn scrape(&self, url: &str) -> Result<String> {
        let html = self.run_chrome(url).await?;

        if html.is_empty() {
            warn!(url, scraper = "chrome", "Empty DOM output");
            return Ok(String::new());
        }

        let text = clean_page_text(&String::from_utf8_lossy(&html));

        if text.is_empty() {
            warn!(url, scraper = "chrome", "Empty content after text extraction");
            return Ok(String::new());
        }

        info!(url, scraper = "chrome", bytes = text.len(), "Scraped successfully");
        Ok(text)
    }

    fn name(&self) -> &str {
        "chrome"
    }
}

// --- WebSearcher trait ---

#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Return up to `max_results` result URLs for a query, in backend order.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;
}

// --- SearxNG searcher ---

pub struct SearxSearcher {
    client: SearxClient,
}

impl SearxSearcher {
    pub fn new(base_url: &str) -> Self {
        info!(base_url, "Using SearxSearcher");
        Self {
            client: SearxClient::new(base_url),
        }
    }
}

#[async_trait]
impl WebSearcher for SearxSearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let urls = self
            .client
            .search(query, max_results)
            .await
            .context("SearxNG query failed")?;

        info!(query, count = urls.len(), "SearxNG search complete");
        Ok(urls)
    }
}
