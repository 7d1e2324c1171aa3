//! Collapses match rows into one summary per ticker.

use std::collections::HashMap;

use crate::domain::{round4, MatchRow, TickerSummary, Trend};

/// Group rows by ticker and summarize each group.
///
/// Groups are emitted in first-seen ticker order, which keeps the output
/// deterministic for a given input ordering. Representative open/close/volume
/// come from the first row in the group; all rows for one ticker share the
/// same underlying quote within a run, so any row's quote fields are
/// equivalent. The headline/summary/sentiment come from the row with the
/// highest impact score, ties going to the earlier row.
#[must_use]
pub fn aggregate(rows: &[MatchRow]) -> Vec<TickerSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&MatchRow>> = HashMap::new();

    for row in rows {
        let group = groups.entry(&row.symbol).or_default();
        if group.is_empty() {
            order.push(&row.symbol);
        }
        group.push(row);
    }

    order
        .into_iter()
        .map(|symbol| summarize(&groups[symbol]))
        .collect()
}

fn summarize(group: &[&MatchRow]) -> TickerSummary {
    let first = group[0];

    let sum: f64 = group.iter().map(|r| r.impact_score).sum();
    let mean = sum / group.len() as f64;

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut top = first;
    for &row in group {
        if row.impact_score > max {
            max = row.impact_score;
            top = row;
        }
        if row.impact_score < min {
            min = row.impact_score;
        }
    }

    TickerSummary {
        symbol: first.symbol.clone(),
        avg_impact: round4(mean),
        max_impact: round4(max),
        min_impact: round4(min),
        article_count: group.len(),
        trend: Trend::classify(mean),
        open: first.open,
        close: first.close,
        volume: first.volume,
        top_headline: top.headline.clone(),
        top_summary: top.summary.clone(),
        sentiment_label: top.sentiment_label.clone(),
    }
}
