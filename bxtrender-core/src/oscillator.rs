//! Oscillator engine — candles in, short/long oscillators and signal line out.
//!
//! Short-term: RSI(EMA(close, l1) - EMA(close, l2), l3) - 50.
//! Long-term:  RSI(EMA(close, l1'), l2') - 50.
//! Signal:     T3(short-term, 5).
//!
//! Everything is precomputed over the full history in one pass; the signal
//! state machine and simulator then walk the arrays bar by bar.

use serde::{Deserialize, Serialize};

use crate::config::{MaType, Mode, ModeConfig};
use crate::domain::{BarColor, Candle, IndicatorPoint};
use crate::rsi::rsi;
use crate::smoothing::{ema, sma};
use crate::t3::t3;

/// T3 period for the signal line. Fixed by the reference in every mode.
pub const SIGNAL_LINE_PERIOD: usize = 5;

/// Full-length oscillator arrays aligned to the (sanitized) candle sequence.
///
/// Values before `warmup` are seed artifacts and must not be read; the
/// public [`OscillatorSeries`] only exposes indices from `warmup` onward.
#[derive(Debug, Clone)]
pub struct OscillatorStack {
    pub warmup: usize,
    pub short: Vec<f64>,
    pub long: Vec<f64>,
    pub signal: Vec<f64>,
    /// Long-period filter MA; `None` when disabled or history is too short
    /// for it (the filter silently drops out rather than failing the run).
    pub ma: Option<Vec<f64>>,
}

impl OscillatorStack {
    /// Precompute all series. Returns `None` when the (sanitized) history is
    /// shorter than the minimum-bars precondition — the "indicator
    /// unavailable" degradation, never an error.
    pub fn compute(candles: &[Candle], config: &ModeConfig) -> Option<Self> {
        let n = candles.len();
        if n < config.min_bars() {
            return None;
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let fast = ema(&closes, config.short_l1);
        let slow = ema(&closes, config.short_l2);
        let spread: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
        let short: Vec<f64> = rsi(&spread, config.short_l3)
            .into_iter()
            .map(|v| v - 50.0)
            .collect();

        let long_ema = ema(&closes, config.long_l1);
        let long: Vec<f64> = rsi(&long_ema, config.long_l2)
            .into_iter()
            .map(|v| v - 50.0)
            .collect();

        let signal = t3(&short, SIGNAL_LINE_PERIOD);

        let ma = if config.ma_filter_on && n >= config.min_bars_for_ma() {
            Some(match config.ma_type {
                MaType::Sma => sma(&closes, config.ma_length),
                MaType::Ema => ema(&closes, config.ma_length),
            })
        } else {
            None
        };

        Some(Self {
            warmup: config.warmup(),
            short,
            long,
            signal,
            ma,
        })
    }

    /// Close > filter-MA gate for Quant-family entries. Always passes when
    /// the filter is off or was disabled for lack of history.
    pub fn ma_gate(&self, close: f64, index: usize) -> bool {
        match &self.ma {
            Some(ma) => close > ma[index],
            None => true,
        }
    }
}

/// The three plotted series, one point per bar from the warmup index onward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OscillatorSeries {
    pub short: Vec<IndicatorPoint>,
    pub long: Vec<IndicatorPoint>,
    pub signal: Vec<IndicatorPoint>,
}

impl OscillatorSeries {
    /// True when the history was too short for any output. Callers must
    /// treat this as "indicator unavailable", not as zero values.
    pub fn is_empty(&self) -> bool {
        self.short.is_empty()
    }
}

/// Turn the raw arrays into colored points for one mode.
///
/// Quant/Ditz use the joint-alignment coloring override; the signal line is
/// only emitted for the modes that consume it (Defensive/Aggressive).
pub fn series_for_mode(stack: &OscillatorStack, candles: &[Candle], mode: Mode) -> OscillatorSeries {
    let joint = matches!(mode, Mode::Quant | Mode::Ditz);
    let with_signal = matches!(mode, Mode::Defensive | Mode::Aggressive);
    build_series(stack, candles, joint, with_signal)
}

/// Mode-agnostic view: single-oscillator coloring, signal line included.
pub fn series_default(stack: &OscillatorStack, candles: &[Candle]) -> OscillatorSeries {
    build_series(stack, candles, false, true)
}

fn build_series(
    stack: &OscillatorStack,
    candles: &[Candle],
    joint_coloring: bool,
    with_signal: bool,
) -> OscillatorSeries {
    let n = candles.len();
    let start = stack.warmup.max(1);

    let mut series = OscillatorSeries::default();
    for i in start..n {
        let time = candles[i].time;
        let (s, s_prev) = (stack.short[i], stack.short[i - 1]);
        let (l, l_prev) = (stack.long[i], stack.long[i - 1]);

        let (short_color, long_color) = if joint_coloring {
            (
                BarColor::from_joint(s, s_prev, s, l),
                BarColor::from_joint(l, l_prev, s, l),
            )
        } else {
            (BarColor::from_value(s, s_prev), BarColor::from_value(l, l_prev))
        };

        series.short.push(IndicatorPoint { time, value: s, color: short_color });
        series.long.push(IndicatorPoint { time, value: l, color: long_color });
        if with_signal {
            let (t, t_prev) = (stack.signal[i], stack.signal[i - 1]);
            series.signal.push(IndicatorPoint {
                time,
                value: t,
                color: BarColor::from_value(t, t_prev),
            });
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_candles, trending_closes};

    #[test]
    fn too_short_history_yields_none() {
        let candles = make_candles(&vec![100.0; 44]);
        assert!(OscillatorStack::compute(&candles, &ModeConfig::default()).is_none());
    }

    #[test]
    fn minimum_history_yields_full_length_arrays() {
        let candles = make_candles(&trending_closes(45));
        let stack = OscillatorStack::compute(&candles, &ModeConfig::default()).unwrap();
        assert_eq!(stack.short.len(), 45);
        assert_eq!(stack.long.len(), 45);
        assert_eq!(stack.signal.len(), 45);
        assert!(stack.ma.is_none());
        assert_eq!(stack.warmup, 35);
    }

    #[test]
    fn uptrend_turns_oscillators_positive() {
        let candles = make_candles(&trending_closes(80));
        let stack = OscillatorStack::compute(&candles, &ModeConfig::default()).unwrap();
        let last = candles.len() - 1;
        assert!(stack.short[last] > 0.0, "short = {}", stack.short[last]);
        assert!(stack.long[last] > 0.0, "long = {}", stack.long[last]);
        // Oscillators are recentered RSI, so they stay inside [-50, 50].
        for i in stack.warmup..candles.len() {
            assert!(stack.short[i].abs() <= 50.0);
            assert!(stack.long[i].abs() <= 50.0);
        }
    }

    #[test]
    fn ma_filter_silently_disabled_on_short_history() {
        let config = ModeConfig {
            ma_filter_on: true,
            ma_length: 200,
            ..ModeConfig::default()
        };
        // Enough for the base precondition (45) but far short of 225.
        let candles = make_candles(&trending_closes(60));
        let stack = OscillatorStack::compute(&candles, &config).unwrap();
        assert!(stack.ma.is_none());
        assert!(stack.ma_gate(1.0, 0), "disabled filter must always pass");
    }

    #[test]
    fn ma_filter_enabled_with_enough_history() {
        let config = ModeConfig {
            ma_filter_on: true,
            ma_length: 20,
            ..ModeConfig::default()
        };
        let candles = make_candles(&trending_closes(80));
        let stack = OscillatorStack::compute(&candles, &config).unwrap();
        let ma = stack.ma.as_ref().unwrap();
        assert_eq!(ma.len(), 80);
        // In a steady uptrend the close sits above its own MA.
        assert!(stack.ma_gate(candles[79].close, 79));
    }

    #[test]
    fn series_start_at_warmup_and_align() {
        let candles = make_candles(&trending_closes(60));
        let config = ModeConfig::default();
        let stack = OscillatorStack::compute(&candles, &config).unwrap();
        let series = series_default(&stack, &candles);
        assert_eq!(series.short.len(), 60 - config.warmup());
        assert_eq!(series.short.len(), series.long.len());
        assert_eq!(series.short.len(), series.signal.len());
        assert_eq!(series.short[0].time, candles[config.warmup()].time);
    }

    #[test]
    fn quant_series_skip_signal_line() {
        let candles = make_candles(&trending_closes(60));
        let stack = OscillatorStack::compute(&candles, &ModeConfig::default()).unwrap();
        let series = series_for_mode(&stack, &candles, Mode::Quant);
        assert!(series.signal.is_empty());
        assert!(!series.short.is_empty());
    }
}
