//! Ditz mode — Quant entries with a patient exit.
//!
//! Tolerates mixed signals: only leaves when *both* oscillators have turned
//! non-positive, not either.

use super::quant::joint_entry;
use super::{BarContext, ModeRules, OpenPosition};

#[derive(Debug, Clone, Copy)]
pub struct Ditz;

impl ModeRules for Ditz {
    fn name(&self) -> &'static str {
        "ditz"
    }

    fn entry(&self, ctx: &BarContext) -> bool {
        joint_entry(ctx)
    }

    fn exit(&self, ctx: &BarContext, _position: &OpenPosition) -> bool {
        ctx.short_now() <= 0.0 && ctx.long_now() <= 0.0
    }

    fn entry_condition_holds(&self, ctx: &BarContext) -> bool {
        ctx.joint_positive() && ctx.ma_gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ctx;

    #[test]
    fn tolerates_one_negative_oscillator() {
        let pos = OpenPosition {
            entry_time: 0,
            entry_price: 100.0,
            highest_close: 100.0,
        };
        let short = [2.0, -1.0];
        let long = [2.0, 3.0];
        assert!(!Ditz.exit(&ctx(1, &short, &long), &pos));
        let long = [2.0, -3.0];
        assert!(Ditz.exit(&ctx(1, &short, &long), &pos));
    }

    #[test]
    fn shares_quant_entry() {
        let short = [-1.0, 2.0];
        let long = [1.0, 2.0];
        assert!(Ditz.entry(&ctx(1, &short, &long)));
    }
}
