//! Collaborator seams for news and market data, plus the JSON snapshot
//! adapters the pipeline runs against.
//!
//! Live providers (news APIs, price feeds) sit behind [`NewsSource`] and
//! [`MarketSource`]; the engine never talks to them directly. The bundled
//! implementations read the snapshot files the upstream fetch/enrichment
//! stages write. An unreadable or malformed snapshot logs a warning and
//! yields an empty collection; "nothing to analyze" is a normal state here,
//! not a failure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{Article, Quote, RankedOutput};
use crate::error::{Result, SnapshotError};
use crate::tagger;

/// Produces the enriched articles for one pipeline run.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn articles(&self) -> Result<Vec<Article>>;
}

/// Produces the per-ticker quote snapshot for one pipeline run.
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn quotes(&self) -> Result<HashMap<String, Quote>>;
}

/// Reads articles from a JSON array snapshot.
pub struct JsonNewsSource {
    path: PathBuf,
}

impl JsonNewsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NewsSource for JsonNewsSource {
    async fn articles(&self) -> Result<Vec<Article>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read news snapshot");
                return Ok(Vec::new());
            }
        };

        let mut articles: Vec<Article> = match serde_json::from_str(&content) {
            Ok(articles) => articles,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed news snapshot");
                return Ok(Vec::new());
            }
        };

        // Articles that arrive untagged get the built-in company scan.
        for article in &mut articles {
            if article.tickers.is_empty() {
                let text = format!("{}. {}", article.title, article.summary);
                article.tickers = tagger::tag_tickers(&text);
            }
        }

        Ok(articles)
    }
}

/// Reads the `{ticker: ohlcv}` quote snapshot from a JSON object.
pub struct JsonMarketSource {
    path: PathBuf,
}

impl JsonMarketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MarketSource for JsonMarketSource {
    async fn quotes(&self) -> Result<HashMap<String, Quote>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read market snapshot");
                return Ok(HashMap::new());
            }
        };

        match serde_json::from_str(&content) {
            Ok(quotes) => Ok(quotes),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed market snapshot");
                Ok(HashMap::new())
            }
        }
    }
}

/// Persist a ranked report as pretty-printed JSON.
pub fn write_report(path: impl AsRef<Path>, report: &RankedOutput) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| SnapshotError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| SnapshotError::Write {
        path: path.display().to_string(),
        source,
    })?;

    Ok(())
}

/// Reload a previously written report.
///
/// Unlike the input snapshots, the output file is this crate's own artifact,
/// so a missing or malformed file is a real error.
pub fn read_report(path: impl AsRef<Path>) -> Result<RankedOutput> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SnapshotError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
