//! Per-mode engine configuration.
//!
//! A malformed config is the only hard failure the engine surfaces (bad or
//! insufficient data degrades to empty output instead), so validation lives
//! here and every public entry point calls it first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five strategy modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Defensive,
    Aggressive,
    Quant,
    Ditz,
    Trader,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Defensive,
        Mode::Aggressive,
        Mode::Quant,
        Mode::Ditz,
        Mode::Trader,
    ];

    /// Quant/Ditz/Trader share the joint-positive entry and the MA filter.
    pub fn is_quant_family(&self) -> bool {
        matches!(self, Mode::Quant | Mode::Ditz | Mode::Trader)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Defensive => "defensive",
            Mode::Aggressive => "aggressive",
            Mode::Quant => "quant",
            Mode::Ditz => "ditz",
            Mode::Trader => "trader",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "defensive" => Ok(Mode::Defensive),
            "aggressive" => Ok(Mode::Aggressive),
            "quant" => Ok(Mode::Quant),
            "ditz" => Ok(Mode::Ditz),
            "trader" => Ok(Mode::Trader),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Moving-average flavor for the optional long-period filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaType {
    Sma,
    Ema,
}

/// Oscillator periods plus the Quant-family filter and trailing-stop knobs.
///
/// Serde defaults match the reference script, so a TOML or JSON config may
/// omit any field. Immutable for the duration of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Short-oscillator fast EMA period.
    pub short_l1: usize,
    /// Short-oscillator slow EMA period.
    pub short_l2: usize,
    /// Short-oscillator RSI period.
    pub short_l3: usize,
    /// Long-oscillator EMA period.
    pub long_l1: usize,
    /// Long-oscillator RSI period.
    pub long_l2: usize,
    /// Gate Quant-family entries on close > moving average.
    pub ma_filter_on: bool,
    pub ma_length: usize,
    pub ma_type: MaType,
    /// Trailing-stop drawdown percent (Trader mode).
    pub tsl_percent: f64,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            short_l1: 5,
            short_l2: 20,
            short_l3: 15,
            long_l1: 20,
            long_l2: 15,
            ma_filter_on: false,
            ma_length: 200,
            ma_type: MaType::Sma,
            tsl_percent: 20.0,
        }
    }
}

impl ModeConfig {
    /// Reject configs the engine cannot compute with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, period) in [
            ("short_l1", self.short_l1),
            ("short_l2", self.short_l2),
            ("short_l3", self.short_l3),
            ("long_l1", self.long_l1),
            ("long_l2", self.long_l2),
            ("ma_length", self.ma_length),
        ] {
            if period < 1 {
                return Err(ConfigError::InvalidPeriod { name, period });
            }
        }
        if !self.tsl_percent.is_finite() || self.tsl_percent <= 0.0 || self.tsl_percent >= 100.0 {
            return Err(ConfigError::InvalidTrailingStop(self.tsl_percent));
        }
        Ok(())
    }

    /// Minimum candle count before any oscillator output is trusted.
    pub fn min_bars(&self) -> usize {
        self.warmup() + 10
    }

    /// First bar index with fully-seeded oscillator values.
    pub fn warmup(&self) -> usize {
        self.short_l2.max(self.long_l1) + self.short_l3
    }

    /// Minimum candle count for the MA filter to participate. Below this the
    /// filter is silently disabled rather than failing the run.
    pub fn min_bars_for_ma(&self) -> usize {
        self.ma_length + self.short_l3 + 10
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid period {name}={period}: every period must be >= 1")]
    InvalidPeriod { name: &'static str, period: usize },

    #[error("invalid trailing stop {0}: must be a percent in (0, 100)")]
    InvalidTrailingStop(f64),

    #[error("unknown mode '{0}' (valid: defensive, aggressive, quant, ditz, trader)")]
    UnknownMode(String),
}
