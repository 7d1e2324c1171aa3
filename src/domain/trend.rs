//! Trend strength classification.

use serde::{Deserialize, Serialize};

/// Ordinal trend bucket derived from an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    #[serde(rename = "Moderate Bullish")]
    ModerateBullish,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Moderate Bearish")]
    ModerateBearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
}

impl Trend {
    /// Classify an impact score into one of the five buckets.
    ///
    /// Bands are half-open and checked top-down, so every real score lands in
    /// exactly one bucket. 0.25 and 0.05 belong to the band below them;
    /// -0.05 and -0.25 belong to the band above them.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score > 0.25 {
            Trend::StrongBullish
        } else if score > 0.05 {
            Trend::ModerateBullish
        } else if score >= -0.05 {
            Trend::Neutral
        } else if score >= -0.25 {
            Trend::ModerateBearish
        } else {
            Trend::StrongBearish
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::StrongBullish => "Strong Bullish",
            Trend::ModerateBullish => "Moderate Bullish",
            Trend::Neutral => "Neutral",
            Trend::ModerateBearish => "Moderate Bearish",
            Trend::StrongBearish => "Strong Bearish",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
