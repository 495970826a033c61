use sqlx::sqlite::SqlitePool;

use crate::models::report::{GroupPeriod, MetricType};

/// SQLite expression bucketing OrderDate for the given period.
///
/// Week buckets resolve to the Monday starting the ISO week, month
/// buckets to the first of the month, so every bucket is a plain
/// `YYYY-MM-DD` date.
fn bucket_expr(period: GroupPeriod) -> &'static str {
    match period {
        GroupPeriod::Day => "date(OrderDate)",
        GroupPeriod::Week => "date(OrderDate, 'weekday 0', '-6 days')",
        GroupPeriod::Month => "date(OrderDate, 'start of month')",
    }
}

fn metric_expr(metric: MetricType) -> &'static str {
    match metric {
        MetricType::Revenue => "SUM(TotalAmount)",
        MetricType::OrderCount => "CAST(COUNT(*) AS REAL)",
    }
}

/// Aggregate order values per period bucket for a single user.
///
/// Returns (bucket, value) pairs in ascending bucket order, at most one
/// row per bucket. The user id is always bound, never interpolated; the
/// only formatted pieces are the fixed expressions above.
pub async fn get_revenue_by_period(
    pool: &SqlitePool,
    user_id: &str,
    period: GroupPeriod,
    metric: MetricType,
) -> Result<Vec<(String, f64)>, sqlx::Error> {
    let sql = format!(
        "SELECT {} AS bucket, {} AS value \
         FROM Orders \
         WHERE UserId = ? \
         GROUP BY bucket \
         ORDER BY bucket ASC",
        bucket_expr(period),
        metric_expr(metric),
    );

    sqlx::query_as::<_, (String, f64)>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
