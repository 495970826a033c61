use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod db;
mod models;
mod services;
mod utils;

use models::report::{GroupPeriod, MetricType, ReportRequest};
use utils::errors::ReportError;

const DEFAULT_DB_PATH: &str = "business.db";
const DEFAULT_OUTPUT_PATH: &str = "revenue_chart.png";

const USAGE: &str = "Usage: revenue-report <USER_ID> [--db PATH] [--out PATH] \
[--period day|week|month] [--metric revenue|orders] [--show]";

/// Build the report request from CLI args with env fallbacks.
/// All values end up in the request struct; nothing stays global.
fn parse_args(args: &[String]) -> Result<ReportRequest, String> {
    let mut user_id = std::env::var("TARGET_USER_ID").ok();
    let mut db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let mut output_path = DEFAULT_OUTPUT_PATH.to_string();
    let mut period = GroupPeriod::Day;
    let mut metric = MetricType::Revenue;
    let mut show = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--db" => {
                db_path = iter.next().ok_or("--db requires a path")?.clone();
            }
            "--out" => {
                output_path = iter.next().ok_or("--out requires a path")?.clone();
            }
            "--period" => {
                period = GroupPeriod::parse(iter.next().ok_or("--period requires a value")?)?;
            }
            "--metric" => {
                metric = MetricType::parse(iter.next().ok_or("--metric requires a value")?)?;
            }
            "--show" => show = true,
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {}\n{}", other, USAGE));
            }
            other => user_id = Some(other.to_string()),
        }
    }

    let user_id = user_id.ok_or(USAGE)?;

    Ok(ReportRequest {
        user_id,
        db_path: PathBuf::from(db_path),
        output_path: PathBuf::from(output_path),
        period,
        metric,
        show,
    })
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("revenue_report=info".parse().unwrap())
                .add_directive("sqlx=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match parse_args(&args) {
        Ok(request) => request,
        Err(msg) => {
            println!("{}", msg);
            return;
        }
    };

    info!(
        "Generating {} {} report for user {}",
        request.period.adjective().to_lowercase(),
        request.metric.noun().to_lowercase(),
        request.user_id
    );

    // One line per outcome; every path returns normally
    match services::report_service::run_report(&request).await {
        Ok(summary) => {
            info!("Report complete: {} data points charted", summary.points);
            println!("Success! Chart saved as {}", summary.output_path.display());
        }
        Err(ReportError::StoreNotFound(path)) => {
            println!("Error: Database not found at {}", path.display());
        }
        Err(ReportError::NoData(user_id)) => {
            println!("No data found for user {}", user_id);
        }
        Err(e) => {
            error!("Report failed: {}", e);
            println!("An error occurred: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let request = parse_args(&args(&["user-123"])).expect("parse");
        assert_eq!(request.user_id, "user-123");
        assert_eq!(request.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(request.period, GroupPeriod::Day);
        assert_eq!(request.metric, MetricType::Revenue);
        assert!(!request.show);
    }

    #[test]
    fn test_parse_args_overrides() {
        let request = parse_args(&args(&[
            "user-123",
            "--db",
            "orders.db",
            "--out",
            "trend.png",
            "--period",
            "week",
            "--metric",
            "orders",
            "--show",
        ]))
        .expect("parse");
        assert_eq!(request.db_path, PathBuf::from("orders.db"));
        assert_eq!(request.output_path, PathBuf::from("trend.png"));
        assert_eq!(request.period, GroupPeriod::Week);
        assert_eq!(request.metric, MetricType::OrderCount);
        assert!(request.show);
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        assert!(parse_args(&args(&["user-123", "--verbose"])).is_err());
    }

    #[test]
    fn test_parse_args_rejects_missing_option_value() {
        assert!(parse_args(&args(&["user-123", "--db"])).is_err());
    }
}
