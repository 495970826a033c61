//! Report configuration models

use std::path::PathBuf;

/// How order rows are bucketed on the time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPeriod {
    Day,
    Week,
    Month,
}

impl GroupPeriod {
    /// Parse a user-supplied period name
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "day" | "daily" => Ok(GroupPeriod::Day),
            "week" | "weekly" => Ok(GroupPeriod::Week),
            "month" | "monthly" => Ok(GroupPeriod::Month),
            _ => Err(format!(
                "Unknown period: '{}'. Use: day, week, month",
                value
            )),
        }
    }

    pub fn adjective(&self) -> &'static str {
        match self {
            GroupPeriod::Day => "Daily",
            GroupPeriod::Week => "Weekly",
            GroupPeriod::Month => "Monthly",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GroupPeriod::Day => "Day",
            GroupPeriod::Week => "Week",
            GroupPeriod::Month => "Month",
        }
    }
}

/// Which aggregated value is charted per bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Revenue,
    OrderCount,
}

impl MetricType {
    /// Parse a user-supplied metric name
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "revenue" | "amount" => Ok(MetricType::Revenue),
            "orders" | "count" => Ok(MetricType::OrderCount),
            _ => Err(format!(
                "Unknown metric: '{}'. Use: revenue, orders",
                value
            )),
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            MetricType::Revenue => "Revenue",
            MetricType::OrderCount => "Order Count",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            MetricType::Revenue => "Revenue ($)",
            MetricType::OrderCount => "Orders",
        }
    }
}

/// Everything one report run needs, passed explicitly into the pipeline
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub user_id: String,
    pub db_path: PathBuf,
    pub output_path: PathBuf,
    pub period: GroupPeriod,
    pub metric: MetricType,
    pub show: bool,
}

/// Result of a successful report run
#[derive(Debug)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub points: usize,
}
