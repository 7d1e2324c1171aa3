//! Output DTOs: per-match rows, per-ticker aggregates, and the ranked report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Trend;

/// The join of one article with one quoted ticker it mentions, with all
/// computed scores. Created by the correlator, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub symbol: String,
    pub sentiment_label: String,
    pub sentiment_num: f64,
    pub movement_score: f64,
    pub volume: u64,
    pub volume_score: f64,
    pub impact_score: f64,
    pub trend: Trend,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub headline: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub timestamp: String,
}

/// Per-ticker aggregate across all match rows in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub symbol: String,
    pub avg_impact: f64,
    pub max_impact: f64,
    pub min_impact: f64,
    pub article_count: usize,
    pub trend: Trend,
    pub open: Decimal,
    pub close: Decimal,
    pub volume: u64,
    pub top_headline: String,
    pub top_summary: String,
    pub sentiment_label: String,
}

/// The complete result of one pipeline run.
///
/// The full aggregated and row-level sets ride along with the top-10 views
/// so consumers can build custom views without re-running the engine. Any of
/// the four sequences may be empty; an all-empty report means "ran with no
/// signal", not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOutput {
    pub generated_at: DateTime<Utc>,
    pub top_10_bullish: Vec<TickerSummary>,
    pub top_10_bearish: Vec<TickerSummary>,
    pub aggregated: Vec<TickerSummary>,
    pub full_list: Vec<MatchRow>,
}

impl RankedOutput {
    /// A well-formed report with no signal in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            generated_at: Utc::now(),
            top_10_bullish: Vec::new(),
            top_10_bearish: Vec::new(),
            aggregated: Vec::new(),
            full_list: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_list.is_empty()
    }
}
