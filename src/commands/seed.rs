use anyhow::Result;
use std::path::Path;

use crate::{
    config::DatabaseConfig,
    database::connect_app_db,
    seed::{SeedCatalog, SeedOutcome, seed_if_empty},
};

pub async fn execute_seed(config: &DatabaseConfig, seed_file: Option<&Path>) -> Result<()> {
    let catalog = match seed_file {
        Some(path) => SeedCatalog::from_file(path)?,
        None => SeedCatalog::builtin()?,
    };

    let db = connect_app_db(config).await?;

    match seed_if_empty(&db, &catalog).await? {
        SeedOutcome::Seeded {
            fruits,
            suppliers,
            links,
        } => {
            println!("Seeded {fruits} fruits, {suppliers} suppliers and {links} supplier links");
        }
        SeedOutcome::Skipped { existing_fruits } => {
            println!("Database already contains {existing_fruits} fruits. Nothing to seed.");
        }
    }

    Ok(())
}
