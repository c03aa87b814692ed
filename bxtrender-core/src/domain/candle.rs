//! Candle — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLC candle for a single symbol on a single period (monthly/weekly/daily).
///
/// `time` is unix seconds at the period open. The engine never mutates
/// candles; all derived series are freshly allocated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Returns true if every price is finite and positive.
    ///
    /// Candles failing this check are dropped by [`sanitize`] before any
    /// computation; a zero or NaN close would poison every downstream
    /// smoothing recurrence.
    pub fn is_valid(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p > 0.0)
    }

    /// Period-open timestamp as a UTC datetime, for display.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// Drop invalid candles, preserving order.
///
/// Input must be strictly increasing in `time`; gaps are tolerated but never
/// reordered, so a plain retain is enough.
pub fn sanitize(candles: &[Candle]) -> Vec<Candle> {
    candles.iter().copied().filter(Candle::is_valid).collect()
}
