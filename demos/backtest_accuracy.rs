use chrono::{Duration, NaiveDate};
use sales_forecast::accuracy::{evaluate_accuracy, DEFAULT_TEST_DAYS};
use sales_forecast::data::DailyRecord;
use sales_forecast::seasonality::detect_seasonality;
use sales_forecast::smoothing::{exponential_smoothing, moving_average, DEFAULT_ALPHA};
use sales_forecast::trend::calculate_trend;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Sales Forecast: Backtest Example");
    println!("================================\n");

    let history = create_sample_history();
    println!("History: {} days", history.len());

    // Smoothed views of the revenue series
    let revenues: Vec<f64> = history.iter().map(|r| r.revenue).collect();
    let ma = moving_average(&revenues, 7);
    let smoothed = exponential_smoothing(&revenues, DEFAULT_ALPHA);
    println!(
        "7-day moving-average baseline: {:.1}",
        ma.last().copied().unwrap_or(0.0)
    );
    println!(
        "Exponentially smoothed level:  {:.1}\n",
        smoothed.last().copied().unwrap_or(0.0)
    );

    let trend = calculate_trend(&revenues);
    println!(
        "Revenue trend: slope {:.3}/day, direction {}",
        trend.slope, trend.direction
    );

    let seasonality = detect_seasonality(&history);
    println!(
        "Sunday factor {:.3}, Saturday factor {:.3}\n",
        seasonality.day_of_week[0], seasonality.day_of_week[6]
    );

    // Hold out the trailing two weeks and score the forecaster against them
    let report = evaluate_accuracy(&history, DEFAULT_TEST_DAYS);
    println!("Backtest over the last {} days:", DEFAULT_TEST_DAYS);
    println!("  MAPE:     {:.1}%", report.mape);
    println!("  RMSE:     {}", report.rmse);
    println!("  Accuracy: {:.1}%", report.accuracy);
}

/// 90 days of sales with a weekly cycle and mild deterministic noise
fn create_sample_history() -> Vec<DailyRecord> {
    let start: NaiveDate = "2023-01-02".parse().unwrap();

    (0..90i64)
        .map(|i| {
            let cycle = (i as f64 * std::f64::consts::PI / 3.5).sin() * 15.0;
            let noise = (i as f64 * 0.7).sin() * 5.0;
            let revenue = 200.0 + cycle + noise;
            DailyRecord {
                date: start + Duration::days(i),
                revenue,
                orders: (revenue / 40.0).round() as u32,
                items: (revenue / 25.0).round() as u32,
            }
        })
        .collect()
}
