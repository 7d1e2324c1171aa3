//! Top-N ranking of ticker summaries.

use crate::domain::TickerSummary;

/// Depth of each ranked view.
pub const TOP_N: usize = 10;

/// Top summaries by average impact, descending. Ties keep input order.
#[must_use]
pub fn top_bullish(summaries: &[TickerSummary]) -> Vec<TickerSummary> {
    let mut sorted: Vec<TickerSummary> = summaries.to_vec();
    sorted.sort_by(|a, b| {
        b.avg_impact
            .partial_cmp(&a.avg_impact)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(TOP_N);
    sorted
}

/// Top summaries by average impact, ascending. Ties keep input order.
#[must_use]
pub fn top_bearish(summaries: &[TickerSummary]) -> Vec<TickerSummary> {
    let mut sorted: Vec<TickerSummary> = summaries.to_vec();
    sorted.sort_by(|a, b| {
        a.avg_impact
            .partial_cmp(&b.avg_impact)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(TOP_N);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trend;
    use rust_decimal_macros::dec;

    fn summary(symbol: &str, avg_impact: f64) -> TickerSummary {
        TickerSummary {
            symbol: symbol.into(),
            avg_impact,
            max_impact: avg_impact,
            min_impact: avg_impact,
            article_count: 1,
            trend: Trend::classify(avg_impact),
            open: dec!(100),
            close: dec!(100),
            volume: 0,
            top_headline: String::new(),
            top_summary: String::new(),
            sentiment_label: "neutral".into(),
        }
    }

    #[test]
    fn bullish_sorts_descending() {
        let summaries = vec![summary("A", 0.1), summary("B", 0.5), summary("C", -0.2)];
        let top = top_bullish(&summaries);
        let order: Vec<&str> = top.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn bearish_sorts_ascending() {
        let summaries = vec![summary("A", 0.1), summary("B", 0.5), summary("C", -0.2)];
        let top = top_bearish(&summaries);
        let order: Vec<&str> = top.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn fewer_than_ten_returns_all_without_padding() {
        let summaries = vec![summary("A", 0.1), summary("B", 0.2)];
        assert_eq!(top_bullish(&summaries).len(), 2);
        assert_eq!(top_bearish(&summaries).len(), 2);
    }

    #[test]
    fn truncates_to_ten() {
        let summaries: Vec<TickerSummary> = (0..15)
            .map(|i| summary(&format!("S{i}"), f64::from(i) / 100.0))
            .collect();
        let top = top_bullish(&summaries);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].symbol, "S14");
    }

    #[test]
    fn ties_keep_input_order() {
        let summaries = vec![summary("FIRST", 0.2), summary("SECOND", 0.2)];
        let top = top_bullish(&summaries);
        assert_eq!(top[0].symbol, "FIRST");
        let bottom = top_bearish(&summaries);
        assert_eq!(bottom[0].symbol, "FIRST");
    }

    #[test]
    fn empty_input_yields_empty_views() {
        assert!(top_bullish(&[]).is_empty());
        assert!(top_bearish(&[]).is_empty());
    }
}
