use chrono::{Duration, Utc};
use sales_forecast::data::{
    CategorySaleFact, MemoryStore, OrderFact, ProductSaleFact, StockLevel,
};
use sales_forecast::engine::ForecastEngine;
use sales_forecast::trend::TrendDirection;

// A store with ~95 days of perfectly flat sales: two orders a day totalling
// 150, two categories, two products and three stock levels.
fn flat_store() -> MemoryStore {
    let today = Utc::now().date_naive();

    let mut orders = Vec::new();
    let mut category_sales = Vec::new();
    let mut product_sales = Vec::new();
    for i in 0..=95i64 {
        let date = today - Duration::days(i);
        orders.push(OrderFact {
            ordered_at: date,
            total: 100.0,
            items: 2,
        });
        orders.push(OrderFact {
            ordered_at: date,
            total: 50.0,
            items: 1,
        });
        category_sales.push(CategorySaleFact {
            sold_at: date,
            category: "cameras".to_string(),
            amount: 100.0,
        });
        category_sales.push(CategorySaleFact {
            sold_at: date,
            category: "books".to_string(),
            amount: 20.0,
        });
        product_sales.push(ProductSaleFact {
            sold_at: date,
            product_id: "p-1".to_string(),
            title: "Camera".to_string(),
            quantity: 2,
        });
        product_sales.push(ProductSaleFact {
            sold_at: date,
            product_id: "p-2".to_string(),
            title: "Book".to_string(),
            quantity: 1,
        });
    }

    let stock_levels = vec![
        StockLevel {
            product_id: "p-1".to_string(),
            title: "Camera".to_string(),
            current_stock: 5,
            units_sold_30d: 60,
        },
        StockLevel {
            product_id: "p-2".to_string(),
            title: "Book".to_string(),
            current_stock: 100,
            units_sold_30d: 30,
        },
        StockLevel {
            product_id: "p-idle".to_string(),
            title: "Shelf warmer".to_string(),
            current_stock: 10,
            units_sold_30d: 0,
        },
    ];

    MemoryStore::new(orders, category_sales, product_sales, stock_levels)
}

#[tokio::test]
async fn test_generate_summary_full_workflow() {
    let engine = ForecastEngine::new(flat_store());
    let today = Utc::now().date_naive();

    let summary = engine.generate_summary(60, 30).await.unwrap();

    // Window bounds
    assert_eq!(summary.period.start, today - Duration::days(60));
    assert_eq!(summary.period.end, today);
    assert_eq!(summary.forecast_period.start, today + Duration::days(1));
    assert_eq!(summary.forecast_period.end, today + Duration::days(30));

    // A flat 150/day history forecasts the level exactly
    assert_eq!(summary.daily_forecasts.len(), 30);
    for point in &summary.daily_forecasts {
        assert_eq!(point.predicted_revenue, 150.0);
        assert_eq!(point.predicted_orders, 2);
    }
    assert_eq!(summary.total_predicted_revenue, 4500.0);
    assert_eq!(summary.total_predicted_orders, 60);
    assert_eq!(summary.growth_rate, 0.0);
    assert_eq!(summary.trend, TrendDirection::Stable);
    assert!(summary.average_confidence > 0.7 && summary.average_confidence < 0.95);

    // Totals agree with the daily points
    let revenue_sum: f64 = summary
        .daily_forecasts
        .iter()
        .map(|f| f.predicted_revenue)
        .sum();
    assert_eq!(summary.total_predicted_revenue, revenue_sum);

    // Categories ordered by current revenue, products capped at the limit
    let names: Vec<&str> = summary
        .category_forecasts
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec!["cameras", "books"]);
    assert!(summary.top_growth_products.len() <= 10);
    assert_eq!(summary.top_growth_products[0].product_id, "p-1");

    // Inventory: urgent first, the idle product carries no signal
    assert_eq!(summary.inventory_recommendations.len(), 2);
    assert_eq!(summary.inventory_recommendations[0].product_id, "p-1");
    assert!(!summary
        .inventory_recommendations
        .iter()
        .any(|r| r.product_id == "p-idle"));
}

#[tokio::test]
async fn test_summary_serializes_camel_case() {
    let engine = ForecastEngine::new(flat_store());

    let summary = engine.generate_summary(60, 14).await.unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert!(json.get("totalPredictedRevenue").is_some());
    assert!(json.get("dailyForecasts").is_some());
    assert!(json.get("forecastPeriod").is_some());
    assert!(json["seasonality"].get("dayOfWeek").is_some());
    assert!(json["seasonality"].get("weekOfMonth").is_some());
}

#[tokio::test]
async fn test_empty_store_summary_is_well_formed() {
    let engine = ForecastEngine::new(MemoryStore::default());

    let summary = engine.generate_summary(90, 30).await.unwrap();

    // The gap-filled window is long enough to forecast, but everything is
    // zero and neutral
    assert_eq!(summary.daily_forecasts.len(), 30);
    for point in &summary.daily_forecasts {
        assert_eq!(point.predicted_revenue, 0.0);
        assert_eq!(point.predicted_orders, 0);
    }
    assert_eq!(summary.total_predicted_revenue, 0.0);
    assert_eq!(summary.growth_rate, 0.0);
    assert_eq!(summary.trend, TrendDirection::Stable);
    assert!(summary.category_forecasts.is_empty());
    assert!(summary.top_growth_products.is_empty());
    assert!(summary.inventory_recommendations.is_empty());
    for factor in summary.seasonality.day_of_week {
        assert_eq!(factor, 1.0);
    }
}

#[tokio::test]
async fn test_insufficient_history_still_returns_summary() {
    let engine = ForecastEngine::new(flat_store());

    let summary = engine.generate_summary(5, 30).await.unwrap();

    assert!(summary.daily_forecasts.is_empty());
    assert_eq!(summary.total_predicted_revenue, 0.0);
    assert_eq!(summary.total_predicted_orders, 0);
    assert_eq!(summary.average_confidence, 0.0);
    // No forecast against real recent revenue reads as a full decline
    assert_eq!(summary.growth_rate, -100.0);
    assert_eq!(summary.trend, TrendDirection::Down);
}

#[tokio::test]
async fn test_engine_backtest_on_flat_history() {
    let engine = ForecastEngine::new(flat_store());

    let report = engine.evaluate_accuracy(14).await.unwrap();

    assert_eq!(report.mape, 0.0);
    assert_eq!(report.rmse, 0.0);
    assert_eq!(report.accuracy, 100.0);
}

#[tokio::test]
async fn test_historical_series_is_gap_free() {
    let engine = ForecastEngine::new(flat_store());

    let series = engine.historical_series(10).await.unwrap();

    assert_eq!(series.len(), 11);
    for pair in series.windows(2) {
        assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
    }
    assert_eq!(series[0].revenue, 150.0);
}
