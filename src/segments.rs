//! Category and product demand extrapolation
//!
//! Segments are scored by comparing the first and second halves of the
//! historical window. The half-to-half growth rate drives both the trend
//! classification and the forward projection.

use crate::data::{CategorySaleFact, ProductSaleFact};
use crate::trend::TrendDirection;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Growth-rate band (percent) within which a category counts as stable
pub const CATEGORY_TREND_BAND: f64 = 5.0;

/// Growth-rate band (percent) within which a product counts as stable
pub const PRODUCT_TREND_BAND: f64 = 10.0;

/// Predicted unit sales above which a non-declining product is flagged for
/// restock
pub const RESTOCK_SALES_FLOOR: u32 = 5;

/// Confidence attached to every category projection
pub const CATEGORY_CONFIDENCE: f64 = 0.8;

/// Revenue projection for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForecast {
    pub category: String,
    pub current_revenue: f64,
    pub predicted_revenue: f64,
    pub growth_rate: f64,
    pub trend: TrendDirection,
    pub confidence: f64,
}

/// Demand direction of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for DemandTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandTrend::Increasing => write!(f, "increasing"),
            DemandTrend::Decreasing => write!(f, "decreasing"),
            DemandTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Unit-demand projection for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForecast {
    pub product_id: String,
    pub title: String,
    pub current_sales: u32,
    pub predicted_sales: u32,
    pub demand_trend: DemandTrend,
    pub restock_recommendation: bool,
    pub recommended_quantity: u32,
}

/// Half-to-half growth rate in percent
///
/// A first half of zero with positive second-half activity reads as a new,
/// currently active segment and scores 100; zero on both sides scores 0.
fn growth_rate(first_half: f64, second_half: f64) -> f64 {
    if first_half > 0.0 {
        (second_half - first_half) / first_half * 100.0
    } else if second_half > 0.0 {
        100.0
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Project per-category revenue over the forecast horizon
///
/// Facts dated strictly before `midpoint` fall into the first half. Output
/// is ordered by current-period revenue, highest first.
pub fn forecast_categories(
    facts: &[CategorySaleFact],
    midpoint: NaiveDate,
    historical_days: u32,
    forecast_days: u32,
) -> Vec<CategoryForecast> {
    let mut halves: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for fact in facts {
        let entry = halves.entry(fact.category.as_str()).or_insert((0.0, 0.0));
        if fact.sold_at < midpoint {
            entry.0 += fact.amount;
        } else {
            entry.1 += fact.amount;
        }
    }

    let half_window = f64::from(historical_days) / 2.0;
    let mut forecasts: Vec<CategoryForecast> = halves
        .into_iter()
        .map(|(category, (first_half, second_half))| {
            let growth = growth_rate(first_half, second_half);
            let trend = if growth > CATEGORY_TREND_BAND {
                TrendDirection::Up
            } else if growth < -CATEGORY_TREND_BAND {
                TrendDirection::Down
            } else {
                TrendDirection::Stable
            };

            let daily_average = second_half / half_window;
            let predicted = daily_average * f64::from(forecast_days) * (1.0 + growth / 100.0);

            CategoryForecast {
                category: category.to_string(),
                current_revenue: second_half,
                predicted_revenue: predicted.round(),
                growth_rate: round1(growth),
                trend,
                confidence: CATEGORY_CONFIDENCE,
            }
        })
        .collect();

    forecasts.sort_by(|a, b| b.current_revenue.total_cmp(&a.current_revenue));
    forecasts
}

/// Project per-product unit demand over the forecast horizon
///
/// Facts dated strictly before `midpoint` fall into the first half. Output
/// is ordered by current-period unit sales, highest first, truncated to
/// `limit` entries.
pub fn forecast_product_demand(
    facts: &[ProductSaleFact],
    midpoint: NaiveDate,
    historical_days: u32,
    forecast_days: u32,
    limit: usize,
) -> Vec<ProductForecast> {
    struct Halves<'a> {
        title: &'a str,
        first: u32,
        second: u32,
    }

    let mut products: BTreeMap<&str, Halves<'_>> = BTreeMap::new();
    for fact in facts {
        let entry = products
            .entry(fact.product_id.as_str())
            .or_insert_with(|| Halves {
                title: fact.title.as_str(),
                first: 0,
                second: 0,
            });
        if fact.sold_at < midpoint {
            entry.first += fact.quantity;
        } else {
            entry.second += fact.quantity;
        }
    }

    let half_window = f64::from(historical_days) / 2.0;
    let mut forecasts: Vec<ProductForecast> = products
        .into_iter()
        .map(|(product_id, halves)| {
            let growth = growth_rate(f64::from(halves.first), f64::from(halves.second));
            let demand_trend = if growth > PRODUCT_TREND_BAND {
                DemandTrend::Increasing
            } else if growth < -PRODUCT_TREND_BAND {
                DemandTrend::Decreasing
            } else {
                DemandTrend::Stable
            };

            let daily_average = f64::from(halves.second) / half_window;
            let predicted_sales = (daily_average * f64::from(forecast_days) * (1.0 + growth / 100.0))
                .round() as u32;

            let restock_recommendation =
                demand_trend != DemandTrend::Decreasing && predicted_sales > RESTOCK_SALES_FLOOR;

            ProductForecast {
                product_id: product_id.to_string(),
                title: halves.title.to_string(),
                current_sales: halves.second,
                predicted_sales,
                demand_trend,
                restock_recommendation,
                recommended_quantity: if restock_recommendation {
                    predicted_sales
                } else {
                    0
                },
            }
        })
        .collect();

    forecasts.sort_by(|a, b| b.current_sales.cmp(&a.current_sales));
    forecasts.truncate(limit);
    forecasts
}
