//! Per-mode entry/exit rules.
//!
//! Each mode is a small stateless struct implementing [`ModeRules`]; the
//! only state threaded through a simulation is the [`OpenPosition`]
//! accumulator the simulator carries. Consecutive-bar streaks are re-derived
//! by walking backward from the current bar, reproducing the reference
//! bar-for-bar.

pub mod aggressive;
pub mod defensive;
pub mod ditz;
pub mod quant;
pub mod trader;

pub use aggressive::Aggressive;
pub use defensive::Defensive;
pub use ditz::Ditz;
pub use quant::Quant;
pub use trader::Trader;

use crate::config::{Mode, ModeConfig};

/// Everything a mode may inspect at one bar: the oscillator arrays, the
/// current index (always >= 1), the bar close, and the MA-filter verdict.
#[derive(Debug, Clone, Copy)]
pub struct BarContext<'a> {
    pub index: usize,
    pub short: &'a [f64],
    pub long: &'a [f64],
    pub close: f64,
    /// Close > filter MA, or true when the filter is off/disabled.
    pub ma_gate: bool,
}

impl BarContext<'_> {
    pub fn short_now(&self) -> f64 {
        self.short[self.index]
    }

    pub fn short_prev(&self) -> f64 {
        self.short[self.index - 1]
    }

    pub fn long_now(&self) -> f64 {
        self.long[self.index]
    }

    pub fn long_prev(&self) -> f64 {
        self.long[self.index - 1]
    }

    /// Short oscillator crossing from <= 0 to > 0 at this bar.
    pub fn short_crossed_up(&self) -> bool {
        self.short_prev() <= 0.0 && self.short_now() > 0.0
    }

    /// Both oscillators strictly positive at this bar.
    pub fn joint_positive(&self) -> bool {
        self.short_now() > 0.0 && self.long_now() > 0.0
    }
}

/// The single-position accumulator carried across the bar loop.
#[derive(Debug, Clone, Copy)]
pub struct OpenPosition {
    pub entry_time: i64,
    pub entry_price: f64,
    /// Highest close observed since entry, for the trailing stop.
    pub highest_close: f64,
}

/// One mode's predicate table.
pub trait ModeRules {
    fn name(&self) -> &'static str;

    /// Should a flat strategy enter at this bar's close?
    fn entry(&self, ctx: &BarContext) -> bool;

    /// Should an open position exit at this bar's close?
    fn exit(&self, ctx: &BarContext, position: &OpenPosition) -> bool;

    /// Does the entry *condition* hold at this bar on its own, without a
    /// crossing? Quant-family modes use this for the final-bar check — a
    /// currently-true condition must not be missed merely because the
    /// crossing happened before the observed window.
    fn entry_condition_holds(&self, _ctx: &BarContext) -> bool {
        false
    }
}

/// Build the rule set for a mode.
pub fn rules_for(mode: Mode, config: &ModeConfig) -> Box<dyn ModeRules> {
    match mode {
        Mode::Defensive => Box::new(Defensive),
        Mode::Aggressive => Box::new(Aggressive),
        Mode::Quant => Box::new(Quant),
        Mode::Ditz => Box::new(Ditz),
        Mode::Trader => Box::new(Trader::new(config.tsl_percent)),
    }
}

/// "Light red": bearish-side but rising versus the prior bar.
pub fn is_light_red(short: &[f64], index: usize) -> bool {
    index >= 1 && short[index] <= 0.0 && short[index] > short[index - 1]
}

/// "Dark red": bearish-side and falling or flat. The Defensive/Aggressive
/// exit trigger.
pub fn is_dark_red(short: &[f64], index: usize) -> bool {
    index >= 1 && short[index] <= 0.0 && short[index] <= short[index - 1]
}

/// Consecutive light-red bars ending at `index`, walking backward while the
/// condition holds.
pub fn light_red_streak(short: &[f64], index: usize) -> usize {
    let mut count = 0;
    let mut i = index;
    while is_light_red(short, i) {
        count += 1;
        if i == 0 {
            break;
        }
        i -= 1;
    }
    count
}

/// Consecutive joint-positive bars ending at `index`.
pub fn joint_positive_streak(short: &[f64], long: &[f64], index: usize) -> usize {
    let mut count = 0;
    let mut i = index;
    loop {
        if short[i] <= 0.0 || long[i] <= 0.0 {
            break;
        }
        count += 1;
        if i == 0 {
            break;
        }
        i -= 1;
    }
    count
}

#[cfg(test)]
pub(crate) fn ctx<'a>(index: usize, short: &'a [f64], long: &'a [f64]) -> BarContext<'a> {
    BarContext {
        index,
        short,
        long,
        close: 100.0,
        ma_gate: true,
    }
}
