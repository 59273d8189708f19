//! Backtested forecast accuracy scoring

use crate::data::DailyRecord;
use crate::forecast::forecast_future_sales;
use crate::seasonality::detect_seasonality;
use serde::Serialize;
use tracing::warn;

/// Default trailing window held out as backtest ground truth
pub const DEFAULT_TEST_DAYS: u32 = 14;

/// Training days required beyond the held-out window before a backtest runs
pub const MIN_TRAINING_DAYS: usize = 30;

/// Forecast error scores from a backtest
///
/// MAPE averages absolute percentage error over held-out days with positive
/// actual revenue only; RMSE averages squared error over every held-out day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub mape: f64,
    pub rmse: f64,
    pub accuracy: f64,
}

impl AccuracyReport {
    /// The defined insufficient-data result, distinct from an error
    pub fn zeroed() -> Self {
        Self {
            mape: 0.0,
            rmse: 0.0,
            accuracy: 0.0,
        }
    }
}

/// Hold out the trailing `test_days` of `history` and score a forecast of
/// the remaining prefix against them
///
/// Seasonality is re-derived from the prefix alone so the held-out days
/// never leak into the model. History shorter than `test_days +`
/// [`MIN_TRAINING_DAYS`] yields the zeroed report.
pub fn evaluate_accuracy(history: &[DailyRecord], test_days: u32) -> AccuracyReport {
    let holdout_len = test_days as usize;
    if holdout_len == 0 || history.len() < holdout_len + MIN_TRAINING_DAYS {
        warn!(
            history_days = history.len(),
            test_days, "insufficient history for backtest, returning zeroed metrics"
        );
        return AccuracyReport::zeroed();
    }

    let (training, holdout) = history.split_at(history.len() - holdout_len);
    let seasonality = detect_seasonality(training);
    let forecasts = forecast_future_sales(training, test_days, &seasonality);

    let mut sum_abs_pct_error = 0.0;
    let mut sum_squared_error = 0.0;
    let mut positive_days = 0u32;

    for (i, actual_day) in holdout.iter().enumerate() {
        let actual = actual_day.revenue;
        let predicted = forecasts.get(i).map_or(0.0, |f| f.predicted_revenue);

        if actual > 0.0 {
            sum_abs_pct_error += ((actual - predicted) / actual).abs();
            positive_days += 1;
        }
        sum_squared_error += (actual - predicted).powi(2);
    }

    let mape = if positive_days > 0 {
        sum_abs_pct_error / f64::from(positive_days) * 100.0
    } else {
        0.0
    };
    let rmse = (sum_squared_error / holdout_len as f64).sqrt();
    let accuracy = (100.0 - mape).max(0.0);

    AccuracyReport {
        mape: round1(mape),
        rmse: rmse.round(),
        accuracy: round1(accuracy),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
