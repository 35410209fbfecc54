use crate::config::DatabaseConfig;
use crate::database::connect_app_db;
use crate::store::FruitStore;
use anyhow::Result;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

pub fn test_database_config(temp_dir: &TempDir) -> DatabaseConfig {
    let db_path = temp_dir.path().join("test.db");
    DatabaseConfig::sqlite(db_path.to_string_lossy().to_string())
}

/// The returned directory must outlive the connection.
pub async fn setup_test_db() -> Result<(TempDir, DatabaseConnection)> {
    let temp_dir = tempfile::tempdir()?;
    let db = connect_app_db(&test_database_config(&temp_dir)).await?;
    Ok((temp_dir, db))
}

pub async fn setup_test_store() -> Result<(TempDir, FruitStore)> {
    let (temp_dir, db) = setup_test_db().await?;
    Ok((temp_dir, FruitStore::new(db)))
}
