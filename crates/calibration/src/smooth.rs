//! Scan-line smoothing of calibration reference series.
//!
//! The onboard reference readings (ICT temperature, ICT counts, space-view
//! counts) are noisy line to line; thermal calibration uses a centered
//! running mean over neighbouring scan lines instead of the raw per-line
//! values. Long passes use a 51-line window, short ones fall back to 3.

/// Window length for a record of `lines` scan lines.
pub fn window_for(lines: usize) -> usize {
    if lines > 51 {
        51
    } else {
        3
    }
}

/// Centered running mean with edge clamping.
///
/// Interior elements average a full window; the leading and trailing
/// half-windows take the value of the nearest fully averaged element.
/// Series shorter than the window are returned unchanged.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let half = window / 2;
    if n < window {
        return values.to_vec();
    }
    let mut out = vec![0.0; n];
    for i in half..n - half {
        out[i] = values[i - half..=i + half].iter().sum::<f64>() / window as f64;
    }
    for i in 0..half {
        out[i] = out[half];
    }
    for i in n - half..n {
        out[i] = out[n - 1 - half];
    }
    out
}
