use crate::config::{DatabaseConfig, DatabaseType};
use crate::database::migration::Migrator;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY_PATH: &str = ":memory:";

pub fn database_url(config: &DatabaseConfig) -> Result<String> {
    if let Some(url) = &config.url {
        return Ok(url.clone());
    }

    let url = match &config.ty {
        DatabaseType::Sqlite => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("SQLite database path is required"))?;
            if path == SQLITE_MEMORY_PATH {
                "sqlite::memory:".to_string()
            } else {
                format!("sqlite://{path}?mode=rwc")
            }
        }
        DatabaseType::Mysql | DatabaseType::Postgresql => {
            let scheme = match config.ty {
                DatabaseType::Mysql => "mysql",
                _ => "postgresql",
            };
            let host = config
                .host
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("{} database host is required", config.ty))?;
            let port = config
                .port
                .or(config.ty.default_port())
                .ok_or_else(|| anyhow::anyhow!("{} database port is required", config.ty))?;
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("{} database name is required", config.ty))?;
            let username = config
                .username
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("{} database username is required", config.ty))?;
            let password = config
                .password
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("{} database password is required", config.ty))?;
            format!("{scheme}://{username}:{password}@{host}:{port}/{database}")
        }
    };

    Ok(url)
}

/// Opens the pool without touching the schema.
pub async fn open_app_db(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let db_url = database_url(config)?;

    if config.ty == DatabaseType::Sqlite
        && let Some(path) = config.path.as_deref()
        && path != SQLITE_MEMORY_PATH
        && let Some(parent) = std::path::Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut opt = ConnectOptions::new(&db_url);
    opt.connect_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.ty == DatabaseType::Sqlite {
        enable_sqlite_pragmas(&db).await?;
    }

    info!(database_type = %config.ty, "Connected to database");
    Ok(db)
}

pub async fn connect_app_db(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let db = open_app_db(config).await?;
    ensure_migrations(&db).await?;
    Ok(db)
}

async fn enable_sqlite_pragmas(db: &DatabaseConnection) -> Result<()> {
    db.execute(sea_orm::Statement::from_string(
        sea_orm::DatabaseBackend::Sqlite,
        "PRAGMA journal_mode = WAL;".to_string(),
    ))
    .await?;

    db.execute(sea_orm::Statement::from_string(
        sea_orm::DatabaseBackend::Sqlite,
        "PRAGMA busy_timeout = 10000;".to_string(),
    ))
    .await?;

    db.execute(sea_orm::Statement::from_string(
        sea_orm::DatabaseBackend::Sqlite,
        "PRAGMA foreign_keys = ON;".to_string(),
    ))
    .await?;

    Ok(())
}

pub async fn pending_migrations(db: &DatabaseConnection) -> Result<Vec<String>> {
    let pending = Migrator::get_pending_migrations(db).await?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}

async fn ensure_migrations(db: &DatabaseConnection) -> Result<()> {
    let pending = pending_migrations(db).await?;
    if pending.is_empty() {
        return Ok(());
    }

    info!(pending = %pending.join(", "), "Applying database migrations");
    if let Err(e) = Migrator::up(db, None).await {
        return Err(anyhow::anyhow!("Failed to run database migrations: {}", e));
    }

    Ok(())
}
