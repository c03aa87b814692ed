//! B-Xtrender Core — oscillators, five-mode signal rules, trade simulator,
//! metrics.
//!
//! The engine reproduces the reference B-Xtrender script bar-for-bar:
//! - Smoothing primitives with the reference's seed/backfill conventions
//! - Short/long RSI-based oscillators plus a T3 signal line
//! - Five strategy modes (Defensive, Aggressive, Quant, Ditz, Trader)
//! - Next-bar-execution trade simulator with trailing-stop support
//! - Ledger metrics and a BUY/SELL/HOLD/WAIT classifier
//!
//! Everything is synchronous and side-effect-free; one call processes one
//! complete candle history. Hosts that scan many symbols own the
//! parallelism.

pub mod classify;
pub mod config;
pub mod domain;
pub mod engine;
pub mod metrics;
pub mod modes;
pub mod oscillator;
pub mod rsi;
pub mod simulator;
pub mod smoothing;
pub mod synthetic;
pub mod t3;

pub use classify::{classify_signal, SignalAdvice, TradeSignal};
pub use config::{ConfigError, MaType, Mode, ModeConfig};
pub use domain::{
    sanitize, BarColor, Candle, IndicatorPoint, Marker, MarkerPosition, MarkerShape, Trade,
};
pub use engine::{compute_oscillators, simulate, Simulation};
pub use metrics::{compute_metrics, Metrics};
pub use oscillator::OscillatorSeries;
