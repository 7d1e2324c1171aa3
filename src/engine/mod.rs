//! The correlate → score → aggregate → rank pipeline.
//!
//! The engine is a pure synchronous function of an input snapshot; it does no
//! I/O and holds no state between runs, so concurrent runs over independent
//! snapshots are safe.

mod aggregator;
mod correlator;
mod ranker;

pub use aggregator::aggregate;
pub use correlator::correlate;
pub use ranker::{top_bearish, top_bullish, TOP_N};

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::{Article, ImpactWeights, Quote, RankedOutput};

/// Run the full engine over one input snapshot.
///
/// Data flows strictly forward: articles and quotes are joined into match
/// rows, rows are aggregated per ticker, and aggregates are ranked into the
/// bullish/bearish views. Empty inputs produce a well-formed empty report.
#[must_use]
pub fn analyze(
    articles: &[Article],
    quotes: &HashMap<String, Quote>,
    weights: &ImpactWeights,
) -> RankedOutput {
    let rows = correlate(articles, quotes, weights);
    let aggregated = aggregate(&rows);

    RankedOutput {
        generated_at: Utc::now(),
        top_10_bullish: top_bullish(&aggregated),
        top_10_bearish: top_bearish(&aggregated),
        aggregated,
        full_list: rows,
    }
}
