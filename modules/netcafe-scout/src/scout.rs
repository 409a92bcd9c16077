use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::scraper::{ChromeScraper, PageScraper, SearxSearcher, WebSearcher};
use crate::store::ArtifactStore;

/// Stats from a scout run. Informational only; per-URL failures never change
/// the process exit code.
#[derive(Debug, Default)]
pub struct ScoutStats {
    pub urls_scraped: u32,
    pub urls_empty: u32,
    pub urls_failed: u32,
    pub artifacts_written: u32,
}

impl std::fmt::Display for ScoutStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Scout Run Complete ===")?;
        writeln!(f, "URLs scraped:      {}", self.urls_scraped)?;
        writeln!(f, "URLs empty:        {}", self.urls_empty)?;
        writeln!(f, "URLs failed:       {}", self.urls_failed)?;
        write!(f, "Artifacts written: {}", self.artifacts_written)
    }
}

pub struct Scout {
    searcher: Box<dyn WebSearcher>,
    scraper: Box<dyn PageScraper>,
    store: ArtifactStore,
    max_results: usize,
}

impl Scout {
    pub fn new(config: &Config) -> Self {
        Self {
            searcher: Box::new(SearxSearcher::new(&config.searxng_instance_url)),
            scraper: Box::new(ChromeScraper::new(&config.chrome_bin)),
            store: ArtifactStore::new(&config.data_dir),
            max_results: config.max_cafes_to_search,
        }
    }

    /// Construct a scout from explicit components. Lets tests substitute stub
    /// searchers and scrapers for the network-facing ones.
    pub fn with_components(
        searcher: Box<dyn WebSearcher>,
        scraper: Box<dyn PageScraper>,
        store: ArtifactStore,
        max_results: usize,
    ) -> Self {
        Self {
            searcher,
            scraper,
            store,
            max_results,
        }
    }

    /// Run one full search-scrape-store cycle for a station name. URLs are
    /// processed strictly in order, one at a time; every per-URL failure is
    /// logged and isolated.
    pub async fn run(&self, station: &str) -> Result<ScoutStats> {
        let mut stats = ScoutStats::default();

        let query = format!("{station}駅 ネットカフェ");
        info!(query = query.as_str(), "Searching");

        let urls = match self.searcher.search(&query, self.max_results).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!(query = query.as_str(), error = %e, "Search failed, continuing with no results");
                Vec::new()
            }
        };

        if urls.is_empty() {
            info!("No search results found");
            return Ok(stats);
        }

        info!(count = urls.len(), "Found URLs to scrape");

        for url in &urls {
            if url.is_empty() {
                continue;
            }
            let url = url.as_str();

            info!(url, scraper = self.scraper.name(), "Scraping");

            let text = match self.scraper.scrape(url).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(url, error = %e, "Scrape failed");
                    stats.urls_failed += 1;
                    continue;
                }
            };

            if text.is_empty() {
                stats.urls_empty += 1;
                continue;
            }
            stats.urls_scraped += 1;

            match self.store.save(url, &text) {
                Ok(_) => stats.artifacts_written += 1,
                Err(e) => warn!(url, error = %e, "Failed to save artifact"),
            }
        }

        Ok(stats)
    }
}
