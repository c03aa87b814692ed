//! Trade — one round trip in the simulated ledger, plus its chart marker.

use serde::{Deserialize, Serialize};

/// A single simulated trade.
///
/// Created when an entry signal fires and a next bar exists to execute it;
/// mutated exactly once at close; never deleted. The ledger holds at most one
/// open trade at any time (all modes are single-position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_time: i64,
    pub entry_price: f64,
    pub exit_time: Option<i64>,
    pub exit_price: Option<f64>,
    /// Realized return for closed trades, unrealized for open ones.
    pub return_pct: f64,
    pub is_open: bool,
    /// Last observed close while the trade is open.
    pub current_price: Option<f64>,
}

impl Trade {
    pub fn open(entry_time: i64, entry_price: f64) -> Self {
        Self {
            entry_time,
            entry_price,
            exit_time: None,
            exit_price: None,
            return_pct: 0.0,
            is_open: true,
            current_price: None,
        }
    }

    /// Close the trade at the given fill. Return is a plain percent.
    pub fn close(&mut self, exit_time: i64, exit_price: f64) {
        self.exit_time = Some(exit_time);
        self.exit_price = Some(exit_price);
        self.return_pct = (exit_price - self.entry_price) / self.entry_price * 100.0;
        self.is_open = false;
        self.current_price = None;
    }

    /// Revalue an open trade against the latest close.
    pub fn mark(&mut self, close: f64) {
        self.current_price = Some(close);
        if self.entry_price > 0.0 {
            self.return_pct = (close - self.entry_price) / self.entry_price * 100.0;
        }
    }

    pub fn is_winner(&self) -> bool {
        !self.is_open && self.return_pct > 0.0
    }
}

/// Where a marker hangs relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    BelowBar,
    AboveBar,
}

/// Marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// Chart annotation co-produced with each trade transition.
///
/// Purely derivative of the ledger; the charting collaborator consumes these
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub time: i64,
    pub position: MarkerPosition,
    pub shape: MarkerShape,
    pub text: String,
}

impl Marker {
    pub fn buy(time: i64) -> Self {
        Self {
            time,
            position: MarkerPosition::BelowBar,
            shape: MarkerShape::ArrowUp,
            text: "BUY".to_string(),
        }
    }

    pub fn sell(time: i64) -> Self {
        Self {
            time,
            position: MarkerPosition::AboveBar,
            shape: MarkerShape::ArrowDown,
            text: "SELL".to_string(),
        }
    }
}
