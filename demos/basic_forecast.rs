use chrono::{Datelike, Duration, Utc};
use sales_forecast::data::{
    CategorySaleFact, MemoryStore, OrderFact, ProductSaleFact, StockLevel,
};
use sales_forecast::engine::{ForecastEngine, DEFAULT_FORECAST_DAYS, DEFAULT_HISTORICAL_DAYS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Sales Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    println!("Creating sample sales history...");
    let store = create_sample_store();
    let engine = ForecastEngine::new(store);

    println!("Generating forecast summary...\n");
    let summary = engine
        .generate_summary(DEFAULT_HISTORICAL_DAYS, DEFAULT_FORECAST_DAYS)
        .await?;

    println!(
        "History window:  {} .. {}",
        summary.period.start, summary.period.end
    );
    println!(
        "Forecast window: {} .. {}",
        summary.forecast_period.start, summary.forecast_period.end
    );
    println!(
        "Predicted revenue: {} ({} orders), growth {}% ({})",
        summary.total_predicted_revenue,
        summary.total_predicted_orders,
        summary.growth_rate,
        summary.trend
    );
    println!("Average confidence: {}\n", summary.average_confidence);

    println!("First forecast week:");
    for point in summary.daily_forecasts.iter().take(7) {
        println!(
            "  {}: {} (interval {} .. {}, confidence {:.2})",
            point.date,
            point.predicted_revenue,
            point.lower_bound,
            point.upper_bound,
            point.confidence
        );
    }

    println!("\nDay-of-week factors (Sunday first):");
    for (i, factor) in summary.seasonality.day_of_week.iter().enumerate() {
        println!("  day {}: {:.3}", i, factor);
    }

    println!("\nCategory outlook:");
    for category in &summary.category_forecasts {
        println!(
            "  {}: current {} -> predicted {} ({}%, {})",
            category.category,
            category.current_revenue,
            category.predicted_revenue,
            category.growth_rate,
            category.trend
        );
    }

    println!("\nTop products:");
    for product in &summary.top_growth_products {
        println!(
            "  {} [{}]: current {} -> predicted {} ({})",
            product.title,
            product.product_id,
            product.current_sales,
            product.predicted_sales,
            product.demand_trend
        );
    }

    println!("\nInventory recommendations:");
    for r in &summary.inventory_recommendations {
        println!(
            "  {} [{}]: {} days of stock, {} -> reorder {}",
            r.title, r.product_id, r.days_of_stock, r.action, r.recommended_quantity
        );
    }

    Ok(())
}

/// Build ~90 days of sample sales with a weekend lift and a gentle upward
/// trend
fn create_sample_store() -> MemoryStore {
    let today = Utc::now().date_naive();

    let mut orders = Vec::new();
    let mut category_sales = Vec::new();
    let mut product_sales = Vec::new();

    for i in 0..=90i64 {
        let date = today - Duration::days(i);
        let age = (90 - i) as f64;

        // Weekend lift plus a slow upward drift
        let weekday = date.weekday().num_days_from_sunday();
        let weekend_lift = if weekday == 0 || weekday == 6 { 1.4 } else { 1.0 };
        let revenue = (120.0 + age * 0.8) * weekend_lift;

        orders.push(OrderFact {
            ordered_at: date,
            total: revenue,
            items: 3,
        });
        category_sales.push(CategorySaleFact {
            sold_at: date,
            category: if weekday % 2 == 0 { "cameras" } else { "lenses" }.to_string(),
            amount: revenue,
        });
        product_sales.push(ProductSaleFact {
            sold_at: date,
            product_id: "cam-x100".to_string(),
            title: "Compact Camera X100".to_string(),
            quantity: if weekend_lift > 1.0 { 3 } else { 2 },
        });
    }

    let stock_levels = vec![
        StockLevel {
            product_id: "cam-x100".to_string(),
            title: "Compact Camera X100".to_string(),
            current_stock: 8,
            units_sold_30d: 70,
        },
        StockLevel {
            product_id: "lens-35".to_string(),
            title: "35mm Lens".to_string(),
            current_stock: 60,
            units_sold_30d: 12,
        },
    ];

    MemoryStore::new(orders, category_sales, product_sales, stock_levels)
}
