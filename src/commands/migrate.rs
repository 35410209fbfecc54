use anyhow::Result;
use clap::ValueEnum;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use crate::{
    config::DatabaseConfig,
    database::{migration::Migrator, open_app_db, pending_migrations},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MigrateAction {
    /// Apply all pending migrations
    #[default]
    Up,
    /// Roll back the most recent migration
    Down,
    /// List applied and pending migrations
    Status,
}

pub async fn execute_migrate(config: &DatabaseConfig, action: MigrateAction) -> Result<()> {
    let db = open_app_db(config).await?;
    run_migrate_action(&db, action).await
}

pub async fn run_migrate_action(db: &DatabaseConnection, action: MigrateAction) -> Result<()> {
    match action {
        MigrateAction::Up => {
            let pending = pending_migrations(db).await?;
            if pending.is_empty() {
                println!("No pending migrations. Schema is up to date.");
                return Ok(());
            }
            Migrator::up(db, None).await?;
            for name in &pending {
                println!("✓ Applied {name}");
            }
        }
        MigrateAction::Down => {
            let applied = Migrator::get_applied_migrations(db).await?;
            let Some(last) = applied.last() else {
                println!("No applied migrations to roll back.");
                return Ok(());
            };
            let name = last.name().to_string();
            Migrator::down(db, Some(1)).await?;
            println!("✓ Rolled back {name}");
        }
        MigrateAction::Status => {
            for migration in Migrator::get_applied_migrations(db).await? {
                println!("applied  {}", migration.name());
            }
            for name in pending_migrations(db).await? {
                println!("pending  {name}");
            }
        }
    }

    Ok(())
}
