// Test stubs for the scout pipeline.
//
// Two stubs matching the two trait boundaries:
// - StubSearcher (WebSearcher) — fixed URL list, or an error from every call
// - StubScraper (PageScraper) — HashMap-based URL→text

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::scraper::{PageScraper, WebSearcher};

/// Fixed-result searcher.
pub struct StubSearcher {
    urls: Vec<String>,
    fail: bool,
}

impl StubSearcher {
    pub fn new(urls: &[&str]) -> Self {
        Self {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            fail: false,
        }
    }

    /// A searcher whose every call fails, for degraded-run tests.
    pub fn failing() -> Self {
        Self {
            urls: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl WebSearcher for StubSearcher {
    async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<String>> {
        if self.fail {
            bail!("StubSearcher: search failure");
        }
        Ok(self.urls.iter().take(max_results).cloned().collect())
    }
}

/// HashMap-based scraper. Returns `Err` for unregistered URLs.
/// Builder pattern: `.on_page()`.
pub struct StubScraper {
    pages: HashMap<String, String>,
}

impl StubScraper {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn on_page(mut self, url: &str, text: &str) -> Self {
        self.pages.insert(url.to_string(), text.to_string());
        self
    }
}

impl Default for StubScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageScraper for StubScraper {
    async fn scrape(&self, url: &str) -> Result<String> {
        match self.pages.get(url) {
            Some(text) => Ok(text.clone()),
            None => bail!("StubScraper: no page registered for {url}"),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}
