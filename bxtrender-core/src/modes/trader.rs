//! Trader mode — Quant entries with a trailing stop.
//!
//! Exits when both oscillators go strictly negative, or when the close has
//! drawn down `tsl_percent` from the highest close observed since entry.

use super::quant::joint_entry;
use super::{BarContext, ModeRules, OpenPosition};

#[derive(Debug, Clone, Copy)]
pub struct Trader {
    tsl_percent: f64,
}

impl Trader {
    pub fn new(tsl_percent: f64) -> Self {
        Self { tsl_percent }
    }

    fn stop_breached(&self, ctx: &BarContext, position: &OpenPosition) -> bool {
        ctx.close <= position.highest_close * (1.0 - self.tsl_percent / 100.0)
    }
}

impl ModeRules for Trader {
    fn name(&self) -> &'static str {
        "trader"
    }

    fn entry(&self, ctx: &BarContext) -> bool {
        joint_entry(ctx)
    }

    fn exit(&self, ctx: &BarContext, position: &OpenPosition) -> bool {
        (ctx.short_now() < 0.0 && ctx.long_now() < 0.0) || self.stop_breached(ctx, position)
    }

    fn entry_condition_holds(&self, ctx: &BarContext) -> bool {
        ctx.joint_positive() && ctx.ma_gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ctx;

    fn pos(highest: f64) -> OpenPosition {
        OpenPosition {
            entry_time: 0,
            entry_price: 100.0,
            highest_close: highest,
        }
    }

    #[test]
    fn exits_on_trailing_stop_breach() {
        let trader = Trader::new(20.0);
        let short = [2.0, 3.0];
        let long = [2.0, 3.0];
        let mut c = ctx(1, &short, &long);
        c.close = 95.0;
        // Peak 120, stop at 96: 95 breaches even with both oscillators green.
        assert!(trader.exit(&c, &pos(120.0)));
        c.close = 97.0;
        assert!(!trader.exit(&c, &pos(120.0)));
    }

    #[test]
    fn joint_negative_exit_is_strict() {
        let trader = Trader::new(20.0);
        // Zero is not strictly negative; Trader stays in where Ditz leaves.
        let short = [2.0, 0.0];
        let long = [2.0, 0.0];
        assert!(!trader.exit(&ctx(1, &short, &long), &pos(100.0)));
        let short = [2.0, -1.0];
        let long = [2.0, -1.0];
        assert!(trader.exit(&ctx(1, &short, &long), &pos(100.0)));
    }
}
