//! Defensive mode — the slowest entries of the five.
//!
//! Enter on a zero-line crossing of the short oscillator, or after a
//! negative run has been rising for four straight bars (a late-but-confirmed
//! recovery). Exit on the first dark-red bar.

use super::{is_dark_red, light_red_streak, BarContext, ModeRules, OpenPosition};

#[derive(Debug, Clone, Copy)]
pub struct Defensive;

impl ModeRules for Defensive {
    fn name(&self) -> &'static str {
        "defensive"
    }

    fn entry(&self, ctx: &BarContext) -> bool {
        ctx.short_crossed_up() || light_red_streak(ctx.short, ctx.index) == 4
    }

    fn exit(&self, ctx: &BarContext, _position: &OpenPosition) -> bool {
        is_dark_red(ctx.short, ctx.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ctx;

    const LONG: [f64; 8] = [0.0; 8];

    #[test]
    fn enters_on_zero_cross() {
        let short = [-3.0, -1.0, 2.0, 4.0, 0.0, 0.0, 0.0, 0.0];
        assert!(Defensive.entry(&ctx(2, &short, &LONG)));
        assert!(!Defensive.entry(&ctx(3, &short, &LONG)));
    }

    #[test]
    fn enters_on_fourth_light_red_bar() {
        let short = [-10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 0.0, 0.0];
        // Streaks at indices 1..4 are 1, 2, 3, 4.
        assert!(!Defensive.entry(&ctx(3, &short, &LONG)));
        assert!(Defensive.entry(&ctx(4, &short, &LONG)));
    }

    #[test]
    fn exits_on_dark_red() {
        let short = [2.0, -1.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let pos = OpenPosition {
            entry_time: 0,
            entry_price: 100.0,
            highest_close: 100.0,
        };
        // Index 1: negative and falling from positive → dark red.
        assert!(Defensive.exit(&ctx(1, &short, &LONG), &pos));
        assert!(Defensive.exit(&ctx(2, &short, &LONG), &pos));
    }

    #[test]
    fn holds_through_light_red() {
        let short = [-5.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let pos = OpenPosition {
            entry_time: 0,
            entry_price: 100.0,
            highest_close: 100.0,
        };
        assert!(!Defensive.exit(&ctx(1, &short, &LONG), &pos));
    }
}
