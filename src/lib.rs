//! # Sales Forecast
//!
//! A Rust library for daily sales forecasting and inventory planning.
//!
//! ## Features
//!
//! - Daily sales series handling (bucketing, gap-filling, CSV fact ingestion)
//! - Smoothing primitives (moving average, exponential smoothing)
//! - Least-squares trend estimation with direction classification
//! - Multiplicative seasonality detection (day-of-week, week-of-month,
//!   month-of-year)
//! - Short-horizon revenue/order forecasts with confidence scores and
//!   prediction intervals
//! - Category and product demand extrapolation
//! - Inventory reorder recommendations
//! - Backtested accuracy scoring (MAPE, RMSE)
//!
//! The numeric core is pure and synchronous; only the orchestrating
//! [`ForecastEngine`](engine::ForecastEngine) is async, issuing its
//! independent data-store fetches concurrently.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::data::MemoryStore;
//! use sales_forecast::engine::{
//!     ForecastEngine, DEFAULT_FORECAST_DAYS, DEFAULT_HISTORICAL_DAYS,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> sales_forecast::Result<()> {
//! let store = MemoryStore::default();
//! let engine = ForecastEngine::new(store);
//!
//! let summary = engine
//!     .generate_summary(DEFAULT_HISTORICAL_DAYS, DEFAULT_FORECAST_DAYS)
//!     .await?;
//! println!(
//!     "predicted revenue over {} days: {}",
//!     summary.daily_forecasts.len(),
//!     summary.total_predicted_revenue
//! );
//!
//! let report = engine.evaluate_accuracy(14).await?;
//! println!("backtest accuracy: {}%", report.accuracy);
//! # Ok(())
//! # }
//! ```

pub mod accuracy;
pub mod data;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod inventory;
pub mod seasonality;
pub mod segments;
pub mod smoothing;
pub mod trend;

// Re-export commonly used types
pub use crate::accuracy::AccuracyReport;
pub use crate::data::{DailyRecord, DataLoader, MemoryStore, SalesStore};
pub use crate::engine::{ForecastEngine, ForecastSummary};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::ForecastPoint;
pub use crate::seasonality::SeasonalityProfile;
pub use crate::trend::{TrendDirection, TrendModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
