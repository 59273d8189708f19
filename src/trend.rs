//! Trend estimation via ordinary least squares

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative band around a zero slope that still counts as flat
///
/// The band scales with the series mean so a high-revenue series does not
/// register noise as a trend while a low-revenue series stays sensitive.
pub const STABLE_BAND: f64 = 0.02;

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Least-squares line fitted over a series indexed `0..n-1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
    pub direction: TrendDirection,
}

/// Fit a least-squares line through `series` against its indices
///
/// Fewer than two points is a defined edge case, not an error: the slope is
/// zero, the intercept is the single value (or zero) and the direction is
/// stable. The direction is stable unless `|slope|` exceeds
/// [`STABLE_BAND`] times the series mean.
pub fn calculate_trend(series: &[f64]) -> TrendModel {
    let n = series.len();
    if n < 2 {
        return TrendModel {
            slope: 0.0,
            intercept: series.first().copied().unwrap_or(0.0),
            direction: TrendDirection::Stable,
        };
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n = n as f64;
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    let threshold = (sum_y / n) * STABLE_BAND;
    let direction = if slope > threshold {
        TrendDirection::Up
    } else if slope < -threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    TrendModel {
        slope,
        intercept,
        direction,
    }
}
