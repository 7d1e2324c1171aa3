//! Market quote types and the intraday movement score.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::round4;

/// One OHLCV snapshot for a ticker in the current session.
///
/// Treated as immutable for the duration of a pipeline run; every match row
/// for a ticker shares the same quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Decimal,
    #[serde(default)]
    pub high: Decimal,
    #[serde(default)]
    pub low: Decimal,
    #[serde(default)]
    pub close: Decimal,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub timestamp: String,
}

impl Quote {
    /// Intraday movement: `(close - open) / open`, rounded to 4 decimals.
    ///
    /// Positive means the price rose during the session. A zero open yields
    /// 0.0 without attempting the division; degenerate quotes (halted or
    /// placeholder entries) are expected input.
    #[must_use]
    pub fn movement_score(&self) -> f64 {
        if self.open.is_zero() {
            return 0.0;
        }

        let movement = (self.close - self.open) / self.open;
        round4(movement.to_f64().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(open: Decimal, close: Decimal) -> Quote {
        Quote {
            open,
            high: close.max(open),
            low: close.min(open),
            close,
            volume: 0,
            timestamp: String::new(),
        }
    }

    #[test]
    fn upward_move_is_positive() {
        assert_eq!(quote(dec!(100), dec!(105)).movement_score(), 0.05);
    }

    #[test]
    fn downward_move_is_negative() {
        assert_eq!(quote(dec!(50), dec!(49)).movement_score(), -0.02);
    }

    #[test]
    fn zero_open_returns_zero_exactly() {
        assert_eq!(quote(dec!(0), dec!(105)).movement_score(), 0.0);
    }

    #[test]
    fn movement_rounds_to_four_decimals() {
        // (101 - 99) / 99 = 0.0202020...
        assert_eq!(quote(dec!(99), dec!(101)).movement_score(), 0.0202);
    }
}
