//! Relative Strength Index over an arbitrary f64 series.
//!
//! Gains and losses come from the first-difference of the input, smoothed
//! with Wilder's RMA; the first defined value lands one bar after the RMA
//! seed. Undefined indices are filled with the neutral 50 instead of NaN,
//! matching the reference script.

use crate::smoothing::rma;

/// RSI in [0, 100], same length as the input, 50-filled where undefined.
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let mut out = vec![50.0; n];
    if period == 0 || n < 2 {
        return out;
    }

    let mut gains = vec![0.0; n - 1];
    let mut losses = vec![0.0; n - 1];
    for i in 1..n {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gains[i - 1] = change;
        } else {
            losses[i - 1] = -change;
        }
    }

    let avg_gain = rma(&gains, period);
    let avg_loss = rma(&losses, period);

    // Change index i corresponds to data index i + 1.
    for i in (period.saturating_sub(1))..(n - 1) {
        out[i + 1] = rsi_value(avg_gain[i], avg_loss[i]);
    }
    out
}

/// Tie-break set preserved exactly for reference parity: no losses with some
/// gain pins to 100; a fully flat window is neutral 50.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain > 0.0 {
        100.0
    } else if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn all_gains_pin_to_100() {
        let data = [100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        let out = rsi(&data, 3);
        assert_approx(out[3], 100.0, DEFAULT_EPSILON);
        assert_approx(out[5], 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn all_losses_pin_to_0() {
        let data = [105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        let out = rsi(&data, 3);
        assert_approx(out[3], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn flat_series_is_neutral() {
        let data = [100.0; 8];
        let out = rsi(&data, 3);
        for &v in &out {
            assert_approx(v, 50.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn warmup_is_filled_with_50() {
        let data = [44.0, 44.34, 44.09, 43.61, 44.33];
        let out = rsi(&data, 3);
        assert_approx(out[0], 50.0, DEFAULT_EPSILON);
        assert_approx(out[1], 50.0, DEFAULT_EPSILON);
        assert_approx(out[2], 50.0, DEFAULT_EPSILON);
        // First defined value one bar after the seed.
        assert!(out[3] > 0.0 && out[3] < 100.0);
    }

    #[test]
    fn known_mixed_value() {
        // Changes: +0.34, -0.25, -0.48 → seed avg_gain = 0.34/3,
        // avg_loss = 0.73/3 → RSI[3] = 100 - 100/(1 + 0.34/0.73)
        let data = [44.0, 44.34, 44.09, 43.61];
        let out = rsi(&data, 3);
        let expected = 100.0 - 100.0 / (1.0 + 0.34 / 0.73);
        assert_approx(out[3], expected, 1e-9);
    }

    #[test]
    fn bounds_hold_on_noisy_data() {
        let data = [100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0, 91.0];
        for &v in &rsi(&data, 3) {
            assert!((0.0..=100.0).contains(&v), "rsi out of bounds: {v}");
        }
    }

    #[test]
    fn short_input_is_all_neutral() {
        assert_eq!(rsi(&[100.0], 14), vec![50.0]);
        assert!(rsi(&[], 14).is_empty());
    }
}
