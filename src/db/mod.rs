use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::debug;

use crate::utils::errors::ReportError;

pub mod orders;

/// Open a connection pool to an existing SQLite store.
///
/// The store must already exist: a missing file is reported as
/// `StoreNotFound` before any connection is attempted, and the pool
/// never creates the file.
pub async fn init_db(path: &Path) -> Result<SqlitePool, ReportError> {
    if !path.exists() {
        return Err(ReportError::StoreNotFound(path.to_path_buf()));
    }

    debug!("Connecting to SQLite store at {}", path.display());
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false);

    let pool = SqlitePool::connect_with(options).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_store_is_rejected_before_connecting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does_not_exist.db");

        let result = init_db(&path).await;
        assert!(matches!(result, Err(ReportError::StoreNotFound(p)) if p == path));
        // The existence check must not have created the file
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_existing_store_connects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.db");
        std::fs::write(&path, b"").expect("touch store");

        let pool = init_db(&path).await.expect("connect");
        pool.close().await;
    }
}
