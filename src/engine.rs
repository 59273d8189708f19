//! Forecast orchestration over a sales data store
//!
//! The engine owns no state between calls: each invocation fetches fresh
//! aggregates, runs the pure analysis pipeline and composes the combined
//! report consumed by the HTTP boundary.

use crate::accuracy::{evaluate_accuracy, AccuracyReport};
use crate::data::{build_daily_series, DailyRecord, SalesStore};
use crate::forecast::{forecast_future_sales, ForecastPoint};
use crate::inventory::{recommend_inventory, InventoryRecommendation};
use crate::seasonality::{detect_seasonality, SeasonalityProfile};
use crate::segments::{
    forecast_categories, forecast_product_demand, CategoryForecast, ProductForecast,
};
use crate::trend::TrendDirection;
use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

/// Default historical window, in days
pub const DEFAULT_HISTORICAL_DAYS: u32 = 90;

/// Default forecast horizon, in days
pub const DEFAULT_FORECAST_DAYS: u32 = 30;

/// Number of products reported in the summary's growth list
pub const TOP_PRODUCT_LIMIT: usize = 10;

/// Growth-rate band (percent) within which the overall trend reads stable
pub const SUMMARY_TREND_BAND: f64 = 5.0;

/// Inclusive calendar-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The combined forecast report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub period: DateWindow,
    pub forecast_period: DateWindow,
    pub total_predicted_revenue: f64,
    pub total_predicted_orders: u32,
    pub average_confidence: f64,
    pub growth_rate: f64,
    pub trend: TrendDirection,
    pub seasonality: SeasonalityProfile,
    pub daily_forecasts: Vec<ForecastPoint>,
    pub category_forecasts: Vec<CategoryForecast>,
    pub top_growth_products: Vec<ProductForecast>,
    pub inventory_recommendations: Vec<InventoryRecommendation>,
}

/// Orchestrates the forecasting pipeline over a [`SalesStore`]
///
/// Every method is side-effect-free with respect to persisted state; a
/// failed fetch propagates unchanged as the failure of the whole request.
#[derive(Debug, Clone)]
pub struct ForecastEngine<S> {
    store: S,
}

impl<S: SalesStore> ForecastEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gap-filled daily series covering the trailing `days_back` days up to
    /// and including today
    pub async fn historical_series(&self, days_back: u32) -> crate::Result<Vec<DailyRecord>> {
        let today = Utc::now().date_naive();
        let start = today - Duration::days(i64::from(days_back));
        let facts = self.store.fetch_order_facts(days_back).await?;
        Ok(build_daily_series(&facts, start, today))
    }

    /// Produce the combined forecast report
    ///
    /// The four store fetches are independent and run concurrently. With
    /// insufficient history the summary is still well-formed, with empty
    /// daily forecasts.
    pub async fn generate_summary(
        &self,
        historical_days: u32,
        forecast_days: u32,
    ) -> crate::Result<ForecastSummary> {
        info!(historical_days, forecast_days, "generating sales forecast summary");

        let today = Utc::now().date_naive();
        let start = today - Duration::days(i64::from(historical_days));
        let midpoint = today - Duration::days(i64::from(historical_days / 2));

        let (order_facts, category_sales, product_sales, stock_levels) = tokio::try_join!(
            self.store.fetch_order_facts(historical_days),
            self.store.fetch_category_sales(historical_days),
            self.store.fetch_product_sales(historical_days),
            self.store.fetch_stock_levels(),
        )?;

        let history = build_daily_series(&order_facts, start, today);
        let seasonality = detect_seasonality(&history);
        let daily_forecasts = forecast_future_sales(&history, forecast_days, &seasonality);

        let category_forecasts =
            forecast_categories(&category_sales, midpoint, historical_days, forecast_days);
        let top_growth_products = forecast_product_demand(
            &product_sales,
            midpoint,
            historical_days,
            forecast_days,
            TOP_PRODUCT_LIMIT,
        );
        let inventory_recommendations = recommend_inventory(&stock_levels, forecast_days);

        let total_predicted_revenue: f64 =
            daily_forecasts.iter().map(|f| f.predicted_revenue).sum();
        let total_predicted_orders: u32 = daily_forecasts.iter().map(|f| f.predicted_orders).sum();
        let average_confidence = if daily_forecasts.is_empty() {
            0.0
        } else {
            let mean = daily_forecasts.iter().map(|f| f.confidence).sum::<f64>()
                / daily_forecasts.len() as f64;
            round2(mean)
        };

        // Growth compares the forecast total against the trailing
        // `forecast_days` of actual revenue.
        let recent_revenue: f64 = history
            .iter()
            .rev()
            .take(forecast_days as usize)
            .map(|d| d.revenue)
            .sum();
        let growth = if recent_revenue > 0.0 {
            (total_predicted_revenue - recent_revenue) / recent_revenue * 100.0
        } else {
            0.0
        };
        let trend = if growth > SUMMARY_TREND_BAND {
            TrendDirection::Up
        } else if growth < -SUMMARY_TREND_BAND {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };

        info!(
            total_predicted_revenue,
            total_predicted_orders,
            growth_rate = growth,
            %trend,
            "forecast summary generated"
        );

        Ok(ForecastSummary {
            period: DateWindow { start, end: today },
            forecast_period: DateWindow {
                start: today + Duration::days(1),
                end: today + Duration::days(i64::from(forecast_days)),
            },
            total_predicted_revenue,
            total_predicted_orders,
            average_confidence,
            growth_rate: round1(growth),
            trend,
            seasonality,
            daily_forecasts,
            category_forecasts,
            top_growth_products,
            inventory_recommendations,
        })
    }

    /// Backtest the forecaster against the trailing `test_days` of the
    /// default 90-day history
    pub async fn evaluate_accuracy(&self, test_days: u32) -> crate::Result<AccuracyReport> {
        let history = self.historical_series(DEFAULT_HISTORICAL_DAYS).await?;
        Ok(evaluate_accuracy(&history, test_days))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
