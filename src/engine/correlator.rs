//! Joins articles against market quotes, one row per quoted mention.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    sentiment_score, volume_score, Article, ImpactWeights, MatchRow, Quote, Trend,
};

/// Produce one [`MatchRow`] per (article, quoted ticker) pair.
///
/// Mentions without a quote are skipped silently; index pseudo-tickers like
/// SPY or DJI never have a tradable quote and are expected to drop out here.
/// Repeated mentions inside one article are not deduplicated. Output order
/// is insertion order: article order, then mention order within the article.
#[must_use]
pub fn correlate(
    articles: &[Article],
    quotes: &HashMap<String, Quote>,
    weights: &ImpactWeights,
) -> Vec<MatchRow> {
    let mut rows = Vec::new();

    for article in articles {
        let sentiment_num = sentiment_score(&article.sentiment_label);

        for symbol in &article.tickers {
            let Some(quote) = quotes.get(symbol) else {
                debug!(symbol = %symbol, title = %article.title, "no quote for mention, skipping");
                continue;
            };

            let movement = quote.movement_score();
            let vol_score = volume_score(quote.volume);
            let impact = weights.impact_score(sentiment_num, movement, vol_score);

            rows.push(MatchRow {
                symbol: symbol.clone(),
                sentiment_label: article.sentiment_label.clone(),
                sentiment_num,
                movement_score: movement,
                volume: quote.volume,
                volume_score: vol_score,
                impact_score: impact,
                trend: Trend::classify(impact),
                open: quote.open,
                high: quote.high,
                low: quote.low,
                close: quote.close,
                headline: article.title.clone(),
                summary: article.summary.clone(),
                keywords: article.keywords.clone(),
                timestamp: article.timestamp.clone(),
            });
        }
    }

    rows
}
