//! Enriched news article as produced by the upstream NLP stage.

use serde::{Deserialize, Serialize};

fn default_sentiment() -> String {
    "neutral".to_string()
}

/// One enriched article. Immutable once produced; consumed only by the
/// correlator.
///
/// Every field defaults when absent from the input snapshot: the upstream
/// feed is not validated, so a sparse record is substituted-for rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Raw label from the sentiment model, e.g. "4 stars".
    #[serde(default = "default_sentiment", rename = "sentiment")]
    pub sentiment_label: String,
    /// Ticker symbols the article mentions. May be empty.
    #[serde(default, rename = "companies")]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            sentiment_label: default_sentiment(),
            tickers: Vec::new(),
            keywords: Vec::new(),
            timestamp: String::new(),
        }
    }
}
