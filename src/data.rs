//! Sales fact records and the data-access boundary
//!
//! The numeric core never queries a database. Store implementations hand it
//! plain fact records; daily bucketing and gap-filling happen here so every
//! downstream computation sees a sorted, gap-free series.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Category substituted by store implementations when a sale has no
/// category attached. The core never sees a missing category.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Title substituted by store implementations when a product title is
/// missing.
pub const DEFAULT_TITLE: &str = "Unknown";

/// One calendar day of aggregated sales
///
/// Series handed to the analysis functions are sorted ascending by date with
/// no duplicate dates; days without sales carry all-zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
    pub items: u32,
}

impl DailyRecord {
    /// An all-zero record for a day without sales
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            revenue: 0.0,
            orders: 0,
            items: 0,
        }
    }
}

/// One shipped or delivered order
///
/// The store applies the order-status filter; the core only buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFact {
    pub ordered_at: NaiveDate,
    pub total: f64,
    pub items: u32,
}

/// Revenue attributed to a category on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySaleFact {
    pub sold_at: NaiveDate,
    pub category: String,
    pub amount: f64,
}

/// Units of a product sold on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSaleFact {
    pub sold_at: NaiveDate,
    pub product_id: String,
    pub title: String,
    pub quantity: u32,
}

/// Current stock of a product together with its trailing 30-day unit sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub product_id: String,
    pub title: String,
    pub current_stock: u32,
    pub units_sold_30d: u32,
}

/// Extract the revenue series from daily records
pub fn revenue_series(records: &[DailyRecord]) -> Vec<f64> {
    records.iter().map(|r| r.revenue).collect()
}

/// Extract the order-count series from daily records
pub fn order_series(records: &[DailyRecord]) -> Vec<f64> {
    records.iter().map(|r| r.orders as f64).collect()
}

/// Extract the item-count series from daily records
pub fn item_series(records: &[DailyRecord]) -> Vec<f64> {
    records.iter().map(|r| r.items as f64).collect()
}

/// Bucket order facts into one record per calendar day over `start..=end`
///
/// Facts outside the window are ignored. Days without any order are
/// synthesized with all-zero values so the output has no gaps.
pub fn build_daily_series(
    facts: &[OrderFact],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyRecord> {
    let mut buckets: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();

    for fact in facts {
        if fact.ordered_at < start || fact.ordered_at > end {
            continue;
        }
        let entry = buckets
            .entry(fact.ordered_at)
            .or_insert_with(|| DailyRecord::empty(fact.ordered_at));
        entry.revenue += fact.total;
        entry.orders += 1;
        entry.items += fact.items;
    }

    let mut series = Vec::new();
    let mut current = start;
    while current <= end {
        series.push(
            buckets
                .get(&current)
                .cloned()
                .unwrap_or_else(|| DailyRecord::empty(current)),
        );
        current = current + Duration::days(1);
    }
    series
}

/// Read-only access to the sales data the engine consumes
///
/// Implementations are expected to filter orders to shipped/delivered
/// status and to substitute [`DEFAULT_CATEGORY`] / [`DEFAULT_TITLE`] for
/// missing fields. A failed fetch propagates unchanged; the engine applies
/// no retry policy of its own.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Per-order facts for the trailing `days_back` days
    async fn fetch_order_facts(&self, days_back: u32) -> Result<Vec<OrderFact>>;

    /// Per-category sale facts for the trailing `days_back` days
    async fn fetch_category_sales(&self, days_back: u32) -> Result<Vec<CategorySaleFact>>;

    /// Per-product sale facts for the trailing `days_back` days
    async fn fetch_product_sales(&self, days_back: u32) -> Result<Vec<ProductSaleFact>>;

    /// Current stock levels with trailing 30-day unit sales
    async fn fetch_stock_levels(&self) -> Result<Vec<StockLevel>>;
}

/// In-memory [`SalesStore`] backed by fact vectors
///
/// Windowed fetches filter relative to the current UTC day, matching what a
/// database-backed store would return for the same query.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    orders: Vec<OrderFact>,
    category_sales: Vec<CategorySaleFact>,
    product_sales: Vec<ProductSaleFact>,
    stock_levels: Vec<StockLevel>,
}

impl MemoryStore {
    /// Create a store over the given fact vectors
    pub fn new(
        orders: Vec<OrderFact>,
        category_sales: Vec<CategorySaleFact>,
        product_sales: Vec<ProductSaleFact>,
        stock_levels: Vec<StockLevel>,
    ) -> Self {
        Self {
            orders,
            category_sales,
            product_sales,
            stock_levels,
        }
    }

    fn window_start(days_back: u32) -> NaiveDate {
        Utc::now().date_naive() - Duration::days(days_back as i64)
    }
}

#[async_trait]
impl SalesStore for MemoryStore {
    async fn fetch_order_facts(&self, days_back: u32) -> Result<Vec<OrderFact>> {
        let start = Self::window_start(days_back);
        Ok(self
            .orders
            .iter()
            .filter(|f| f.ordered_at >= start)
            .cloned()
            .collect())
    }

    async fn fetch_category_sales(&self, days_back: u32) -> Result<Vec<CategorySaleFact>> {
        let start = Self::window_start(days_back);
        Ok(self
            .category_sales
            .iter()
            .filter(|f| f.sold_at >= start)
            .cloned()
            .collect())
    }

    async fn fetch_product_sales(&self, days_back: u32) -> Result<Vec<ProductSaleFact>> {
        let start = Self::window_start(days_back);
        Ok(self
            .product_sales
            .iter()
            .filter(|f| f.sold_at >= start)
            .cloned()
            .collect())
    }

    async fn fetch_stock_levels(&self) -> Result<Vec<StockLevel>> {
        Ok(self.stock_levels.clone())
    }
}

/// Loader for exported sales fact files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load order facts from a CSV file with `orderedAt,total,items` columns
    pub fn order_facts_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<OrderFact>> {
        Self::read_records(path)
    }

    /// Load category sale facts from a CSV file with
    /// `soldAt,category,amount` columns
    pub fn category_sales_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CategorySaleFact>> {
        Self::read_records(path)
    }

    /// Load product sale facts from a CSV file with
    /// `soldAt,productId,title,quantity` columns
    pub fn product_sales_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ProductSaleFact>> {
        Self::read_records(path)
    }

    /// Load stock levels from a CSV file with
    /// `productId,title,currentStock,unitsSold30d` columns
    pub fn stock_levels_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<StockLevel>> {
        Self::read_records(path)
    }

    fn read_records<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}
