//! Impact scoring: weighted combination of sentiment, price movement, and
//! volume conviction.
//!
//! # Scoring System
//!
//! Each (article, ticker) match is scored on three signals:
//! - **Sentiment**: the article's normalized sentiment in [-1, 1]
//! - **Movement**: intraday fractional price change
//! - **Volume**: a stepped conviction score in {0.0, 0.2, 0.5, 1.0}
//!
//! Signals are combined with fixed weights. Volume carries no direction of
//! its own, so its term is multiplied by the sign of the sentiment: high
//! volume amplifies the direction the news points, it never flips it.

/// Weights for combining the three impact signals.
///
/// Must sum to 1.0; [`crate::config::Config`] rejects any other combination
/// at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactWeights {
    /// Weight applied to the normalized sentiment score.
    pub sentiment: f64,
    /// Weight applied to the intraday movement score.
    pub movement: f64,
    /// Weight applied to the volume conviction score.
    pub volume: f64,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.45,
            movement: 0.35,
            volume: 0.20,
        }
    }
}

impl ImpactWeights {
    /// Weighted impact score, rounded to 4 decimals.
    ///
    /// `impact = w_s * sentiment + w_m * movement + w_v * volume * sign(sentiment)`
    ///
    /// A non-negative sentiment counts as positive sign, so neutral news with
    /// heavy volume still scores mildly bullish rather than flipping bearish.
    #[must_use]
    pub fn impact_score(&self, sentiment_num: f64, movement: f64, volume_score: f64) -> f64 {
        let sign = if sentiment_num >= 0.0 { 1.0 } else { -1.0 };
        let raw = self.sentiment * sentiment_num
            + self.movement * movement
            + self.volume * volume_score * sign;
        round4(raw)
    }
}

/// Map raw traded volume to a conviction score.
///
/// Thresholds are strict (`>`) and applied in descending order, so each
/// volume maps to exactly one step.
#[must_use]
pub fn volume_score(volume: u64) -> f64 {
    if volume > 50_000_000 {
        1.0
    } else if volume > 10_000_000 {
        0.5
    } else if volume > 1_000_000 {
        0.2
    } else {
        0.0
    }
}

/// Round to 4 decimal places. Applied at computation time so repeated
/// serialization is idempotent.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_steps_at_thresholds() {
        assert_eq!(volume_score(0), 0.0);
        assert_eq!(volume_score(1_000_000), 0.0);
        assert_eq!(volume_score(1_000_001), 0.2);
        assert_eq!(volume_score(10_000_000), 0.2);
        assert_eq!(volume_score(10_000_001), 0.5);
        assert_eq!(volume_score(50_000_000), 0.5);
        assert_eq!(volume_score(50_000_001), 1.0);
        assert_eq!(volume_score(u64::MAX), 1.0);
    }

    #[test]
    fn volume_score_is_monotone() {
        let samples = [0, 999_999, 1_000_001, 9_999_999, 10_000_001, 60_000_000];
        let scores: Vec<f64> = samples.iter().map(|&v| volume_score(v)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn impact_matches_hand_computed_bullish_case() {
        let w = ImpactWeights::default();
        // 0.45*1.0 + 0.35*0.05 + 0.20*1.0*1
        assert_eq!(w.impact_score(1.0, 0.05, 1.0), 0.6675);
    }

    #[test]
    fn impact_matches_hand_computed_bearish_case() {
        let w = ImpactWeights::default();
        // 0.45*-1.0 + 0.35*-0.02 + 0.20*0.0*-1
        assert_eq!(w.impact_score(-1.0, -0.02, 0.0), -0.457);
    }

    #[test]
    fn volume_amplifies_sentiment_direction() {
        let w = ImpactWeights::default();
        // Positive sentiment: more volume never lowers the score.
        let base = w.impact_score(0.5, 0.01, 0.0);
        assert!(w.impact_score(0.5, 0.01, 1.0) > base);
        // Negative sentiment: more volume pushes further down.
        let base = w.impact_score(-0.5, 0.01, 0.0);
        assert!(w.impact_score(-0.5, 0.01, 1.0) < base);
    }

    #[test]
    fn zero_sentiment_counts_as_positive_sign() {
        let w = ImpactWeights::default();
        assert_eq!(w.impact_score(0.0, 0.0, 1.0), 0.2);
    }

    #[test]
    fn round4_halves_round_away_from_zero() {
        assert_eq!(round4(0.12345), 0.1235);
        assert_eq!(round4(-0.12345), -0.1235);
        assert_eq!(round4(0.1), 0.1);
    }
}
