use tracing::{debug, info};

use crate::db;
use crate::models::report::{ReportRequest, ReportSummary};
use crate::models::revenue::RevenueSeries;
use crate::services::{aggregate_service, chart_service};
use crate::utils::errors::ReportError;

/// Run the full report pipeline once: query the store, aggregate, render.
pub async fn run_report(request: &ReportRequest) -> Result<ReportSummary, ReportError> {
    let series = load_series(request).await?;

    if series.is_empty() {
        return Err(ReportError::NoData(request.user_id.clone()));
    }
    info!(
        "Aggregated {} data points for user {}",
        series.len(),
        request.user_id
    );

    chart_service::render_chart(&series, request)?;
    info!("Chart written to {}", request.output_path.display());

    // File output already happened; viewer problems must not fail the run
    if request.show {
        chart_service::open_viewer(&request.output_path);
    }

    Ok(ReportSummary {
        output_path: request.output_path.clone(),
        points: series.len(),
    })
}

/// Query the store and build the revenue series. The connection pool is
/// closed on every path before this returns.
async fn load_series(request: &ReportRequest) -> Result<RevenueSeries, ReportError> {
    let pool = db::init_db(&request.db_path).await?;

    let rows = db::orders::get_revenue_by_period(
        &pool,
        &request.user_id,
        request.period,
        request.metric,
    )
    .await;
    pool.close().await;

    let rows = rows?;
    debug!("Query returned {} rows", rows.len());

    Ok(aggregate_service::build_series(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{GroupPeriod, MetricType};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

    fn request_for(dir: &std::path::Path, user_id: &str) -> ReportRequest {
        ReportRequest {
            user_id: user_id.to_string(),
            db_path: dir.join("business.db"),
            output_path: dir.join("revenue_chart.png"),
            period: GroupPeriod::Day,
            metric: MetricType::Revenue,
            show: false,
        }
    }

    async fn create_store(path: &std::path::Path) {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await.expect("create store");
        sqlx::query(
            "CREATE TABLE Orders (
                Id TEXT PRIMARY KEY,
                UserId TEXT NOT NULL,
                OrderDate TEXT NOT NULL,
                TotalAmount REAL NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .expect("create table");
        pool.close().await;
    }

    #[tokio::test]
    async fn test_missing_store_reports_not_found_and_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let request = request_for(dir.path(), "u1");

        let result = run_report(&request).await;
        assert!(matches!(result, Err(ReportError::StoreNotFound(_))));
        assert!(!request.output_path.exists());
    }

    #[tokio::test]
    async fn test_user_without_orders_reports_no_data_and_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let request = request_for(dir.path(), "nobody");
        create_store(&request.db_path).await;

        let result = run_report(&request).await;
        assert!(matches!(result, Err(ReportError::NoData(user)) if user == "nobody"));
        assert!(!request.output_path.exists());
    }

    #[tokio::test]
    async fn test_load_series_aggregates_per_day() {
        let dir = tempfile::tempdir().expect("tempdir");
        let request = request_for(dir.path(), "u1");
        create_store(&request.db_path).await;

        let options = SqliteConnectOptions::new().filename(&request.db_path);
        let pool = SqlitePool::connect_with(options).await.expect("connect");
        for (id, date, amount) in [
            ("a", "2024-01-01 09:00:00", 100.0),
            ("b", "2024-01-01 17:00:00", 50.0),
            ("c", "2024-01-02 09:00:00", 200.0),
        ] {
            sqlx::query(
                "INSERT INTO Orders (Id, UserId, OrderDate, TotalAmount) VALUES (?, 'u1', ?, ?)",
            )
            .bind(id)
            .bind(date)
            .bind(amount)
            .execute(&pool)
            .await
            .expect("insert");
        }
        pool.close().await;

        let series = load_series(&request).await.expect("load");
        assert_eq!(series.len(), 2);
        assert!((series.records[0].revenue - 150.0).abs() < 1e-9);
        assert!((series.records[1].revenue - 200.0).abs() < 1e-9);
        assert_eq!(series.rolling, vec![None, None]);
    }
}
