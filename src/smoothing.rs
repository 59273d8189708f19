//! Smoothing primitives for numeric series

/// Moving-average window used for forecast baselines
pub const BASELINE_WINDOW: usize = 7;

/// Default smoothing factor for exponential smoothing
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Trailing moving average with a shrinking leading window
///
/// For index `i` the average runs over `series[max(0, i - window + 1)..=i]`,
/// so the output has the same length as the input and the first `window - 1`
/// points average over the data available so far. A series shorter than the
/// window is returned unchanged.
pub fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    if series.len() < window {
        return series.to_vec();
    }

    let mut result = Vec::with_capacity(series.len());
    for i in 0..series.len() {
        let start = if i + 1 >= window { i + 1 - window } else { 0 };
        let slice = &series[start..=i];
        result.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    result
}

/// Exponential smoothing seeded with the first observation
///
/// `s[0] = series[0]`, `s[i] = alpha * series[i] + (1 - alpha) * s[i - 1]`.
/// An empty series yields an empty output. `alpha` must lie in `(0, 1]`;
/// values outside that range are a caller contract violation and are not
/// checked at runtime.
pub fn exponential_smoothing(series: &[f64], alpha: f64) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(series.len());
    result.push(series[0]);
    for &value in &series[1..] {
        let previous = result[result.len() - 1];
        result.push(alpha * value + (1.0 - alpha) * previous);
    }
    result
}
