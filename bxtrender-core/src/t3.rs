//! Tillson T3 moving average — the smoothed signal line.
//!
//! Six chained EMAs combined with fixed weights derived from the volume
//! factor b = 0.7. The reference exposes no knob besides the period (fixed
//! at 5 for the signal line in every mode).

use crate::smoothing::ema;

const B: f64 = 0.7;

/// T3 of the input series, same length, using the reference fill
/// conventions of [`ema`].
pub fn t3(data: &[f64], period: usize) -> Vec<f64> {
    let e1 = ema(data, period);
    let e2 = ema(&e1, period);
    let e3 = ema(&e2, period);
    let e4 = ema(&e3, period);
    let e5 = ema(&e4, period);
    let e6 = ema(&e5, period);

    let c1 = -B * B * B;
    let c2 = 3.0 * B * B + 3.0 * B * B * B;
    let c3 = -6.0 * B * B - 3.0 * B - 3.0 * B * B * B;
    let c4 = 1.0 + 3.0 * B + B * B * B + 3.0 * B * B;

    (0..data.len())
        .map(|i| c1 * e6[i] + c2 * e5[i] + c3 * e4[i] + c4 * e3[i])
        .collect()
}
