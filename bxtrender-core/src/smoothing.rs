//! Smoothing primitives: EMA, Wilder's RMA, and SMA over raw f64 series.
//!
//! Fill conventions follow the reference script bar-for-bar rather than the
//! usual NaN-warmup style:
//! - every function returns a vector of the input length;
//! - `data.len() < period` yields an all-zero vector (callers gate on a
//!   minimum-bars threshold before trusting output, never on errors);
//! - EMA and SMA backfill indices before the seed with the seed value;
//!   RMA leaves them at 0.

/// Exponential moving average, seeded with the SMA of the first `period`
/// values.
///
/// EMA[i] = (data[i] - EMA[i-1]) * 2/(period+1) + EMA[i-1]
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if period == 0 || n < period {
        return vec![0.0; n];
    }

    let mut out = vec![0.0; n];
    let seed = data[..period].iter().sum::<f64>() / period as f64;
    for v in out.iter_mut().take(period) {
        *v = seed;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = seed;
    for i in period..n {
        prev = (data[i] - prev) * alpha + prev;
        out[i] = prev;
    }
    out
}

/// Wilder's moving average, the smoothing inside classic RSI.
///
/// RMA[i] = data[i]/period + RMA[i-1]*(period-1)/period
///
/// Same SMA seed as [`ema`], but indices before the seed stay at 0.
pub fn rma(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if period == 0 || n < period {
        return vec![0.0; n];
    }

    let mut out = vec![0.0; n];
    let seed = data[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = seed;

    let p = period as f64;
    let mut prev = seed;
    for i in period..n {
        prev = data[i] / p + prev * (p - 1.0) / p;
        out[i] = prev;
    }
    out
}

/// Simple moving average with the same backfill convention as [`ema`].
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if period == 0 || n < period {
        return vec![0.0; n];
    }

    let mut out = vec![0.0; n];
    let mut sum = data[..period].iter().sum::<f64>();
    let seed = sum / period as f64;
    for v in out.iter_mut().take(period) {
        *v = seed;
    }

    for i in period..n {
        sum += data[i] - data[i - period];
        out[i] = sum / period as f64;
    }
    out
}
