//! Multiplicative seasonality detection over a daily sales series

use crate::data::DailyRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Multiplicative calendar factors centered near 1.0
///
/// Each factor is the bucket's mean revenue divided by the overall mean
/// revenue. Buckets without observations stay at the neutral 1.0, as do
/// buckets whose mean is zero, so factors are strictly positive and safe to
/// multiply into a forecast. Day-of-week is indexed from Sunday (0).
///
/// Series shorter than a full cycle (7 days, 4 weeks, 12 months) yield
/// unreliable factors for the corresponding bucket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityProfile {
    pub day_of_week: [f64; 7],
    pub week_of_month: [f64; 4],
    pub month_of_year: [f64; 12],
}

impl SeasonalityProfile {
    /// Profile with every factor at the neutral 1.0
    pub fn neutral() -> Self {
        Self {
            day_of_week: [1.0; 7],
            week_of_month: [1.0; 4],
            month_of_year: [1.0; 12],
        }
    }

    /// Factor for the weekday of `date`
    pub fn weekday_factor(&self, date: NaiveDate) -> f64 {
        self.day_of_week[date.weekday().num_days_from_sunday() as usize]
    }

    /// Factor for the month of `date`
    pub fn month_factor(&self, date: NaiveDate) -> f64 {
        self.month_of_year[date.month() as usize - 1]
    }
}

impl Default for SeasonalityProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Clone, Copy)]
struct Bucket {
    sum: f64,
    count: u32,
}

impl Bucket {
    const EMPTY: Bucket = Bucket { sum: 0.0, count: 0 };

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn factor(&self, overall_mean: f64) -> f64 {
        if self.count == 0 {
            return 1.0;
        }
        let factor = (self.sum / self.count as f64) / overall_mean;
        if factor == 0.0 {
            1.0
        } else {
            factor
        }
    }
}

/// Decompose a daily series into day-of-week, week-of-month and
/// month-of-year factor tables
///
/// Week-of-month is `ceil(day_of_month / 7)` capped at four buckets:
/// days 29-31 are dropped from the week-of-month aggregation. An empty
/// series yields the neutral profile.
pub fn detect_seasonality(records: &[DailyRecord]) -> SeasonalityProfile {
    if records.is_empty() {
        return SeasonalityProfile::neutral();
    }

    let mut day_of_week = [Bucket::EMPTY; 7];
    let mut week_of_month = [Bucket::EMPTY; 4];
    let mut month_of_year = [Bucket::EMPTY; 12];

    for record in records {
        let dow = record.date.weekday().num_days_from_sunday() as usize;
        let wom = (record.date.day() as usize + 6) / 7;
        let moy = record.date.month() as usize;

        day_of_week[dow].push(record.revenue);
        if wom <= 4 {
            week_of_month[wom - 1].push(record.revenue);
        }
        month_of_year[moy - 1].push(record.revenue);
    }

    let mean = records.iter().map(|r| r.revenue).sum::<f64>() / records.len() as f64;
    let overall_mean = if mean == 0.0 { 1.0 } else { mean };

    SeasonalityProfile {
        day_of_week: day_of_week.map(|b| b.factor(overall_mean)),
        week_of_month: week_of_month.map(|b| b.factor(overall_mean)),
        month_of_year: month_of_year.map(|b| b.factor(overall_mean)),
    }
}
