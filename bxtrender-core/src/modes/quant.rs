//! Quant mode — joint-positive entry, either-negative exit.
//!
//! Enters on the first bar where both oscillators are positive (at least one
//! was non-positive on the prior bar), optionally gated on close > filter
//! MA. Exits as soon as either oscillator turns non-positive.

use super::{BarContext, ModeRules, OpenPosition};

#[derive(Debug, Clone, Copy)]
pub struct Quant;

/// Shared Quant-family entry: first joint-positive bar, MA-gated.
pub(crate) fn joint_entry(ctx: &BarContext) -> bool {
    ctx.joint_positive()
        && (ctx.short_prev() <= 0.0 || ctx.long_prev() <= 0.0)
        && ctx.ma_gate
}

impl ModeRules for Quant {
    fn name(&self) -> &'static str {
        "quant"
    }

    fn entry(&self, ctx: &BarContext) -> bool {
        joint_entry(ctx)
    }

    fn exit(&self, ctx: &BarContext, _position: &OpenPosition) -> bool {
        ctx.short_now() <= 0.0 || ctx.long_now() <= 0.0
    }

    fn entry_condition_holds(&self, ctx: &BarContext) -> bool {
        ctx.joint_positive() && ctx.ma_gate
    }
}
