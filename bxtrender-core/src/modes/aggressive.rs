//! Aggressive mode — front-runs the recovery.
//!
//! Same zero-line crossing entry as Defensive, but instead of waiting for a
//! fourth rising bar it buys within the first two light-red bars. Exits are
//! identical: first dark-red bar.

use super::{is_dark_red, light_red_streak, BarContext, ModeRules, OpenPosition};

#[derive(Debug, Clone, Copy)]
pub struct Aggressive;

impl ModeRules for Aggressive {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn entry(&self, ctx: &BarContext) -> bool {
        if ctx.short_crossed_up() {
            return true;
        }
        let streak = light_red_streak(ctx.short, ctx.index);
        (1..=2).contains(&streak)
    }

    fn exit(&self, ctx: &BarContext, _position: &OpenPosition) -> bool {
        is_dark_red(ctx.short, ctx.index)
    }
}
