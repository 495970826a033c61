use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for a single report run
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Database not found at {}", .0.display())]
    StoreNotFound(PathBuf),
    #[error("No data found for user {0}")]
    NoData(String),
    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Invalid date in query result: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("Chart rendering failed: {0}")]
    Render(String),
}
