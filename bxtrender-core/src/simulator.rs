//! Trade simulator — replays per-bar entry/exit signals into a ledger.
//!
//! Next-bar execution throughout: a signal detected at bar `i`'s close fills
//! at bar `i+1`'s open. An entry with no next bar is dropped; an exit with no
//! next bar leaves the position open. The only state threaded through the
//! loop is the single [`OpenPosition`] accumulator.

use crate::config::Mode;
use crate::domain::{Candle, Marker, Trade};
use crate::modes::{BarContext, ModeRules, OpenPosition};
use crate::oscillator::OscillatorStack;

/// Replay one mode over precomputed oscillators.
///
/// Invariant: at most one open trade exists in the returned ledger, and it
/// is always the last entry.
pub fn replay(
    candles: &[Candle],
    stack: &OscillatorStack,
    rules: &dyn ModeRules,
    mode: Mode,
) -> (Vec<Trade>, Vec<Marker>) {
    let n = candles.len();
    let start = stack.warmup.max(1);

    let mut trades: Vec<Trade> = Vec::new();
    let mut markers: Vec<Marker> = Vec::new();
    let mut position: Option<OpenPosition> = None;

    for i in start..n {
        let ctx = BarContext {
            index: i,
            short: &stack.short,
            long: &stack.long,
            close: candles[i].close,
            ma_gate: stack.ma_gate(candles[i].close, i),
        };

        match position.take() {
            Some(mut pos) => {
                pos.highest_close = pos.highest_close.max(candles[i].close);
                // Invalid entry fills never produce an exit record.
                if pos.entry_price > 0.0 && rules.exit(&ctx, &pos) && i + 1 < n {
                    let fill = &candles[i + 1];
                    if let Some(open_trade) = trades.iter_mut().rev().find(|t| t.is_open) {
                        open_trade.close(fill.time, fill.open);
                    }
                    markers.push(Marker::sell(fill.time));
                } else {
                    position = Some(pos);
                }
            }
            None => {
                if rules.entry(&ctx) && i + 1 < n {
                    let fill = &candles[i + 1];
                    position = Some(OpenPosition {
                        entry_time: fill.time,
                        entry_price: fill.open,
                        highest_close: fill.open,
                    });
                    trades.push(Trade::open(fill.time, fill.open));
                    markers.push(Marker::buy(fill.time));
                }
            }
        }
    }

    let last = &candles[n - 1];
    if position.is_some() {
        // Still in the market: value the open trade at the last close so
        // callers can show unrealized P&L.
        if let Some(open_trade) = trades.iter_mut().rev().find(|t| t.is_open) {
            open_trade.mark(last.close);
        }
    } else if mode.is_quant_family() {
        // The entry condition may hold on the final bar even though the
        // crossing happened before the observed window; a currently-true
        // condition must not be missed. This can append a synthetic open
        // trade right after a real one closed on the last bar — reference
        // behavior, kept as observed.
        let i = n - 1;
        if i >= start {
            let ctx = BarContext {
                index: i,
                short: &stack.short,
                long: &stack.long,
                close: last.close,
                ma_gate: stack.ma_gate(last.close, i),
            };
            if rules.entry_condition_holds(&ctx) {
                let mut trade = Trade::open(last.time, last.close);
                trade.mark(last.close);
                trades.push(trade);
                markers.push(Marker::buy(last.time));
            }
        }
    }

    (trades, markers)
}
