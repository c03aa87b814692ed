//! Engine facade — the surface external collaborators consume.
//!
//! Each function is a cheap, referentially transparent pass over the input
//! candles: one symbol × one mode per call, no shared state, safely
//! parallelizable by the host. Insufficient or dirty history degrades to
//! empty output; a malformed config is the only hard failure.

use serde::{Deserialize, Serialize};

use crate::classify::SignalAdvice;
use crate::config::{ConfigError, Mode, ModeConfig};
use crate::domain::{sanitize, Candle, IndicatorPoint, Marker, Trade};
use crate::modes::rules_for;
use crate::oscillator::{series_default, series_for_mode, OscillatorSeries, OscillatorStack};
use crate::simulator::replay;

/// Everything one `simulate` call produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Simulation {
    pub short: Vec<IndicatorPoint>,
    pub long: Vec<IndicatorPoint>,
    pub signal: Vec<IndicatorPoint>,
    pub trades: Vec<Trade>,
    pub markers: Vec<Marker>,
}

impl Simulation {
    /// True when the history was too short for any output.
    pub fn is_empty(&self) -> bool {
        self.short.is_empty()
    }

    /// Advice for the last closed bar of this simulation.
    pub fn classify(&self, mode: Mode) -> SignalAdvice {
        crate::classify::classify_signal(&self.short, &self.long, &self.trades, mode)
    }
}

/// Compute the oscillator series with mode-agnostic coloring.
///
/// Empty output means "indicator unavailable for this symbol/timeframe",
/// never zero values.
pub fn compute_oscillators(
    candles: &[Candle],
    config: &ModeConfig,
) -> Result<OscillatorSeries, ConfigError> {
    config.validate()?;
    let clean = sanitize(candles);
    Ok(match OscillatorStack::compute(&clean, config) {
        Some(stack) => series_default(&stack, &clean),
        None => OscillatorSeries::default(),
    })
}

/// Run one full backtest: oscillators, per-bar signals, trade ledger,
/// markers.
pub fn simulate(
    candles: &[Candle],
    config: &ModeConfig,
    mode: Mode,
) -> Result<Simulation, ConfigError> {
    config.validate()?;
    let clean = sanitize(candles);
    let Some(stack) = OscillatorStack::compute(&clean, config) else {
        return Ok(Simulation::default());
    };

    let rules = rules_for(mode, config);
    let (trades, markers) = replay(&clean, &stack, rules.as_ref(), mode);
    let series = series_for_mode(&stack, &clean, mode);

    Ok(Simulation {
        short: series.short,
        long: series.long,
        signal: series.signal,
        trades,
        markers,
    })
}
