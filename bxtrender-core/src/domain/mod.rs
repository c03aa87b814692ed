//! Domain types: candles, indicator points, trades, markers.

pub mod candle;
pub mod point;
pub mod trade;

pub use candle::{sanitize, Candle};
pub use point::{BarColor, IndicatorPoint};
pub use trade::{Marker, MarkerPosition, MarkerShape, Trade};
