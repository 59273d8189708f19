//! Stock coverage analysis and reorder recommendations

use crate::data::StockLevel;
use serde::Serialize;
use std::fmt;

/// Days of stock reported when a product shows no consumption at all
pub const NO_CONSUMPTION_DAYS: u32 = 999;

/// Days of remaining stock below which a restock is urgent
pub const URGENT_THRESHOLD_DAYS: f64 = 7.0;

/// Days of remaining stock below which a restock is due soon
pub const SOON_THRESHOLD_DAYS: f64 = 14.0;

/// Days of remaining stock above which a product counts as overstocked
pub const OVERSTOCK_THRESHOLD_DAYS: f64 = 60.0;

/// Reorder action for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    RestockUrgent,
    RestockSoon,
    Sufficient,
    Overstock,
}

impl fmt::Display for StockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockAction::RestockUrgent => write!(f, "restock_urgent"),
            StockAction::RestockSoon => write!(f, "restock_soon"),
            StockAction::Sufficient => write!(f, "sufficient"),
            StockAction::Overstock => write!(f, "overstock"),
        }
    }
}

/// Urgency attached to a reorder action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Reorder recommendation for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecommendation {
    pub product_id: String,
    pub title: String,
    pub current_stock: u32,
    pub predicted_demand: u32,
    pub days_of_stock: u32,
    pub action: StockAction,
    pub recommended_quantity: u32,
    pub urgency: Urgency,
}

/// Convert trailing-30-day sales rates into reorder recommendations
///
/// Demand is the sales rate projected over `forecast_days`, rounded up.
/// Coverage thresholds are evaluated in order: under 7 days is urgent,
/// under 14 is soon, over 60 is overstock, anything else is sufficient. A
/// product with no consumption reports the [`NO_CONSUMPTION_DAYS`] sentinel,
/// classifies as sufficient and is excluded from the output since it carries
/// no actionable signal. Output is sorted by urgency, highest first.
pub fn recommend_inventory(
    stock_levels: &[StockLevel],
    forecast_days: u32,
) -> Vec<InventoryRecommendation> {
    let mut recommendations = Vec::new();

    for level in stock_levels {
        let daily_sales_rate = f64::from(level.units_sold_30d) / 30.0;
        let predicted_demand = (daily_sales_rate * f64::from(forecast_days)).ceil() as u32;

        let (days_of_stock, action, urgency) = if daily_sales_rate > 0.0 {
            let days = f64::from(level.current_stock) / daily_sales_rate;
            let (action, urgency) = if days < URGENT_THRESHOLD_DAYS {
                (StockAction::RestockUrgent, Urgency::High)
            } else if days < SOON_THRESHOLD_DAYS {
                (StockAction::RestockSoon, Urgency::Medium)
            } else if days > OVERSTOCK_THRESHOLD_DAYS {
                (StockAction::Overstock, Urgency::Low)
            } else {
                (StockAction::Sufficient, Urgency::Low)
            };
            (days.round() as u32, action, urgency)
        } else {
            (NO_CONSUMPTION_DAYS, StockAction::Sufficient, Urgency::Low)
        };

        // No consumption and nothing to act on: skip entirely.
        if daily_sales_rate == 0.0 && action == StockAction::Sufficient {
            continue;
        }

        let recommended_quantity = match action {
            StockAction::RestockUrgent | StockAction::RestockSoon => {
                predicted_demand.saturating_sub(level.current_stock)
            }
            StockAction::Sufficient | StockAction::Overstock => 0,
        };

        recommendations.push(InventoryRecommendation {
            product_id: level.product_id.clone(),
            title: level.title.clone(),
            current_stock: level.current_stock,
            predicted_demand,
            days_of_stock,
            action,
            recommended_quantity,
            urgency,
        });
    }

    recommendations.sort_by_key(|r| r.urgency as u8);
    recommendations
}
