// Content-addressed artifact files for scraped pages.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Writes scraped text to `<md5-of-url>.md` files under the data directory.
/// The filename is a pure function of the URL's exact bytes (no
/// normalization), so re-scraping a URL overwrites its previous artifact.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic artifact filename for a URL.
    pub fn artifact_name(url: &str) -> String {
        format!("{:x}.md", md5::compute(url.as_bytes()))
    }

    /// Write one artifact for `url`, creating the data directory if absent and
    /// silently replacing any previous artifact for the same URL.
    pub fn save(&self, url: &str, content: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data dir {}", self.dir.display()))?;

        let path = self.dir.join(Self::artifact_name(url));
        let body = format!("# Scraped Content from {url}\n\n{content}");
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write artifact {}", path.display()))?;

        info!(url, path = %path.display(), "Saved scraped content");
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
