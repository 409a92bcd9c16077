use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the SearxNG instance to query.
    pub searxng_instance_url: String,
    /// Maximum number of search result URLs to process per run.
    pub max_cafes_to_search: usize,
    /// Directory where scraped artifacts are written.
    pub data_dir: String,
    /// Headless Chromium binary used for page rendering.
    pub chrome_bin: String,
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// default suitable for a local SearxNG instance.
    pub fn from_env() -> Self {
        Self {
            searxng_instance_url: env::var("SEARXNG_INSTANCE_URL")
                .unwrap_or_else(|_| "http://localhost:8888".to_string()),
            max_cafes_to_search: env::var("MAX_CAFES_TO_SEARCH")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("MAX_CAFES_TO_SEARCH must be a number"),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            chrome_bin: env::var("CHROME_BIN").unwrap_or_else(|_| "chromium".to_string()),
        }
    }
}
