//! Revenue series models

use chrono::NaiveDate;

/// One aggregated (date, value) point for the target user
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRecord {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// An ordered revenue series plus its trailing moving average.
///
/// `rolling` runs parallel to `records`. A position only carries a value
/// once enough history exists for a full window; earlier positions stay
/// `None` so downstream code cannot mistake "not enough history" for
/// zero revenue.
#[derive(Debug, Clone)]
pub struct RevenueSeries {
    pub records: Vec<RevenueRecord>,
    pub rolling: Vec<Option<f64>>,
}

impl RevenueSeries {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
