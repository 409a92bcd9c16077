pub mod error;

pub use error::{Result, SearxError};

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

pub struct SearxClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default)]
    url: String,
}

impl SearxClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Query the SearxNG instance and return up to `max_results` result URLs
    /// in backend order.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SearxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let data: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearxError::Decode(e.to_string()))?;

        let urls = collect_urls(data, max_results);
        debug!(query, count = urls.len(), "SearxNG search complete");
        Ok(urls)
    }
}

/// Take result URLs in backend order, stopping at `max_results`. An entry with
/// a missing `url` field still counts toward the cap and surfaces as an empty
/// string; the caller decides whether to skip it.
fn collect_urls(data: SearchResponse, max_results: usize) -> Vec<String> {
    data.results
        .into_iter()
        .take(max_results)
        .map(|entry| entry.url)
        .collect()
}
