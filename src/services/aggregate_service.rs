//! Pure aggregation over ordered revenue rows

use chrono::NaiveDate;

use crate::models::revenue::{RevenueRecord, RevenueSeries};

/// Window length for the trailing moving average
pub const ROLLING_WINDOW: usize = 7;

/// Build a revenue series from raw (bucket, value) query rows.
///
/// Rows are assumed ascending by bucket; the aggregation query
/// guarantees that, so it is not re-validated here.
pub fn build_series(rows: Vec<(String, f64)>) -> Result<RevenueSeries, chrono::ParseError> {
    let mut records = Vec::with_capacity(rows.len());
    for (bucket, value) in rows {
        let date = NaiveDate::parse_from_str(&bucket, "%Y-%m-%d")?;
        records.push(RevenueRecord {
            date,
            revenue: value,
        });
    }

    let rolling = rolling_average(&records, ROLLING_WINDOW);
    Ok(RevenueSeries { records, rolling })
}

/// Trailing moving average over the revenue values.
///
/// Position `i` gets the mean of the `window` values ending at `i`
/// inclusive, and only once that many records exist. Earlier positions
/// are `None`, never zero: a partial-window average would be a
/// misleading trend signal.
pub fn rolling_average(records: &[RevenueRecord], window: usize) -> Vec<Option<f64>> {
    let mut averages = Vec::with_capacity(records.len());
    let mut running_sum = 0.0;

    for i in 0..records.len() {
        running_sum += records[i].revenue;
        if i >= window {
            running_sum -= records[i - window].revenue;
        }

        if i + 1 >= window {
            averages.push(Some(running_sum / window as f64));
        } else {
            averages.push(None);
        }
    }

    averages
}
