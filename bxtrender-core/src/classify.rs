//! Signal classifier — BUY/SELL/HOLD/WAIT for the last closed bar.
//!
//! Evaluated at the second-to-last point, deliberately excluding the most
//! recent, possibly still-forming bar. Fresh runs (one or two qualifying
//! bars) report the actionable signal; longer runs report the passive one.

use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::domain::{IndicatorPoint, Trade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSignal {
    Buy,
    Sell,
    Hold,
    Wait,
}

/// A classification plus the length of the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalAdvice {
    pub signal: TradeSignal,
    /// Consecutive bars (ending at the evaluated one) in the current state.
    pub bars: usize,
}

impl SignalAdvice {
    fn wait() -> Self {
        Self {
            signal: TradeSignal::Wait,
            bars: 0,
        }
    }
}

/// Classify the last closed bar for one mode.
///
/// The ledger is consulted only to break the bearish tie: a fresh bearish
/// run is a SELL when a position is open and a WAIT when flat (nothing to
/// sell). Empty or too-short series classify as WAIT — "indicator
/// unavailable" must never look like a signal.
pub fn classify_signal(
    short: &[IndicatorPoint],
    long: &[IndicatorPoint],
    trades: &[Trade],
    mode: Mode,
) -> SignalAdvice {
    if short.len() < 2 || long.len() != short.len() {
        return SignalAdvice::wait();
    }
    let index = short.len() - 2;

    let bullish = |i: usize| {
        if mode.is_quant_family() {
            short[i].value > 0.0 && long[i].value > 0.0
        } else {
            short[i].value > 0.0
        }
    };

    let state = bullish(index);
    let mut bars = 0;
    let mut i = index;
    loop {
        if bullish(i) != state {
            break;
        }
        bars += 1;
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let fresh = bars <= 2;
    let holding = trades.iter().any(|t| t.is_open);

    let signal = match (state, fresh) {
        (true, true) => TradeSignal::Buy,
        (true, false) => TradeSignal::Hold,
        (false, true) if holding => TradeSignal::Sell,
        (false, _) => TradeSignal::Wait,
    };

    SignalAdvice { signal, bars }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BarColor, Trade};

    fn points(values: &[f64]) -> Vec<IndicatorPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| IndicatorPoint {
                time: i as i64,
                value,
                color: BarColor::Green,
            })
            .collect()
    }

    #[test]
    fn fresh_joint_positive_is_buy() {
        // Evaluated bar is index 3 (second to last); joint-positive run of 2.
        let short = points(&[-1.0, -1.0, 1.0, 2.0, 3.0]);
        let long = points(&[1.0, -1.0, 1.0, 2.0, 3.0]);
        let advice = classify_signal(&short, &long, &[], Mode::Quant);
        assert_eq!(advice.signal, TradeSignal::Buy);
        assert_eq!(advice.bars, 2);
    }

    #[test]
    fn stale_joint_positive_is_hold() {
        let short = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let long = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let advice = classify_signal(&short, &long, &[], Mode::Quant);
        assert_eq!(advice.signal, TradeSignal::Hold);
        assert_eq!(advice.bars, 4);
    }

    #[test]
    fn fresh_bearish_with_open_position_is_sell() {
        let short = points(&[1.0, 2.0, 3.0, -1.0, -2.0]);
        let long = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let open = vec![Trade::open(0, 100.0)];
        let advice = classify_signal(&short, &long, &open, Mode::Quant);
        assert_eq!(advice.signal, TradeSignal::Sell);
        assert_eq!(advice.bars, 1);
    }

    #[test]
    fn fresh_bearish_while_flat_is_wait() {
        let short = points(&[1.0, 2.0, 3.0, -1.0, -2.0]);
        let long = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let advice = classify_signal(&short, &long, &[], Mode::Quant);
        assert_eq!(advice.signal, TradeSignal::Wait);
    }

    #[test]
    fn defensive_ignores_long_oscillator() {
        // Short positive and fresh; long deeply negative everywhere.
        let short = points(&[-1.0, -1.0, -1.0, 2.0, 3.0]);
        let long = points(&[-9.0, -9.0, -9.0, -9.0, -9.0]);
        let advice = classify_signal(&short, &long, &[], Mode::Defensive);
        assert_eq!(advice.signal, TradeSignal::Buy);
        assert_eq!(advice.bars, 1);
    }

    #[test]
    fn too_short_series_is_wait() {
        let short = points(&[1.0]);
        let long = points(&[1.0]);
        let advice = classify_signal(&short, &long, &[], Mode::Quant);
        assert_eq!(advice.signal, TradeSignal::Wait);
        assert_eq!(advice.bars, 0);
    }
}
