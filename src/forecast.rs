//! Short-horizon revenue and order forecasting

use crate::data::{order_series, revenue_series, DailyRecord};
use crate::seasonality::SeasonalityProfile;
use crate::smoothing::{moving_average, BASELINE_WINDOW};
use crate::trend::calculate_trend;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::warn;

/// Minimum history length required to produce a forecast
pub const MIN_HISTORY_DAYS: usize = 7;

/// Highest confidence assigned to the nearest forecast day
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Confidence floor for distant forecast days
pub const MIN_CONFIDENCE: f64 = 0.5;

/// One forecast day
///
/// Monetary fields are rounded to whole currency units when the point is
/// built, never inside the trend/seasonality math.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_revenue: f64,
    pub predicted_orders: u32,
    pub confidence: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Project `forecast_days` future days from a daily sales history
///
/// Each day combines a 7-day moving-average baseline, the least-squares
/// trend extrapolated at the absolute index into the combined
/// history-plus-future series, and the day-of-week and month-of-year
/// seasonal factors. The week-of-month factor is exposed in the profile but
/// not applied here. Confidence decays linearly with distance and the
/// prediction interval widens with the population standard deviation of the
/// historical revenue.
///
/// A history shorter than [`MIN_HISTORY_DAYS`] produces no forecast; the
/// result is empty and a warning is logged.
pub fn forecast_future_sales(
    history: &[DailyRecord],
    forecast_days: u32,
    seasonality: &SeasonalityProfile,
) -> Vec<ForecastPoint> {
    if history.len() < MIN_HISTORY_DAYS {
        warn!(
            history_days = history.len(),
            required = MIN_HISTORY_DAYS,
            "insufficient historical data for forecasting"
        );
        return Vec::new();
    }

    let revenues = revenue_series(history);
    let orders = order_series(history);

    let revenue_trend = calculate_trend(&revenues);
    let order_trend = calculate_trend(&orders);

    let revenue_baseline = moving_average(&revenues, BASELINE_WINDOW)
        .last()
        .copied()
        .unwrap_or(0.0);
    let order_baseline = moving_average(&orders, BASELINE_WINDOW)
        .last()
        .copied()
        .unwrap_or(0.0);

    let margin_base = population_std_dev(&revenues);
    let last_date = history[history.len() - 1].date;
    let history_len = history.len() as f64;

    let mut forecasts = Vec::with_capacity(forecast_days as usize);
    for i in 1..=i64::from(forecast_days) {
        let date = last_date + Duration::days(i);
        let offset = i as f64;

        let seasonal_factor = seasonality.weekday_factor(date) * seasonality.month_factor(date);
        let absolute_index = history_len + offset;

        let predicted_revenue =
            ((revenue_baseline + revenue_trend.slope * absolute_index) * seasonal_factor).max(0.0);
        let predicted_orders =
            ((order_baseline + order_trend.slope * absolute_index) * seasonal_factor)
                .round()
                .max(0.0) as u32;

        let confidence = (MAX_CONFIDENCE - 0.01 * offset).max(MIN_CONFIDENCE);

        let margin = margin_base * (1.0 + 0.05 * offset);
        let lower_bound = (predicted_revenue - margin).max(0.0);
        let upper_bound = predicted_revenue + margin;

        forecasts.push(ForecastPoint {
            date,
            predicted_revenue: predicted_revenue.round(),
            predicted_orders,
            confidence,
            lower_bound: lower_bound.round(),
            upper_bound: upper_bound.round(),
        });
    }
    forecasts
}

/// Population standard deviation, zero for degenerate series
pub(crate) fn population_std_dev(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    series.iter().population_std_dev()
}
