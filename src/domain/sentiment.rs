//! Sentiment label normalization.
//!
//! The upstream sentiment model emits star-scale labels ("1 star" through
//! "5 stars"); some feeds use plain "positive"/"negative"/"neutral" instead.
//! Both map onto a fixed numeric scale in [-1, 1].

/// Convert a free-text sentiment label into a score in [-1.0, 1.0].
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unknown
/// labels score 0.0 (neutral): upstream labels are not validated before they
/// reach this engine, so an unrecognized label is expected input, not an
/// error.
#[must_use]
pub fn sentiment_score(label: &str) -> f64 {
    match label.trim().to_lowercase().as_str() {
        "1 star" => -1.0,
        "2 stars" => -0.5,
        "3 stars" => 0.0,
        "4 stars" => 0.5,
        "5 stars" => 1.0,
        "positive" => 0.5,
        "negative" => -0.5,
        "neutral" => 0.0,
        _ => 0.0,
    }
}
