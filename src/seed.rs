use crate::config::SeedConfig;
use crate::database::entities::{fruit_suppliers, fruits, nutritional_info, suppliers};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

pub const BUILTIN_CATALOG: &str = include_str!("seed/catalog.yml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("seed catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("invalid seed catalog: {0}")]
    Catalog(String),
    #[error("seeding rolled back: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub suppliers: Vec<SeedSupplier>,
    #[serde(default)]
    pub fruits: Vec<SeedFruit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedSupplier {
    pub name: String,
    pub country: String,
    pub contact_email: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedFruit {
    pub name: String,
    pub color: String,
    pub taste: String,
    pub origin_country: String,
    pub price_per_kg: f64,
    pub nutrition: SeedNutrition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedNutrition {
    pub calories: i32,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub vitamins: String,
}

impl SeedCatalog {
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(BUILTIN_CATALOG)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let source = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn from_config(config: &SeedConfig) -> Result<Option<Self>, SeedError> {
        match config {
            SeedConfig::Disabled => Ok(None),
            SeedConfig::Builtin => Self::builtin().map(Some),
            SeedConfig::File(path) => Self::from_file(path).map(Some),
        }
    }

    pub fn parse(source: &str) -> Result<Self, SeedError> {
        let catalog: Self = serde_yml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), SeedError> {
        let mut names = HashSet::new();
        for supplier in &self.suppliers {
            if !names.insert(supplier.name.as_str()) {
                return Err(SeedError::Catalog(format!(
                    "duplicate supplier name '{}'",
                    supplier.name
                )));
            }
            if !(0.0..=5.0).contains(&supplier.rating) {
                return Err(SeedError::Catalog(format!(
                    "supplier '{}' rating {} is outside 0-5",
                    supplier.name, supplier.rating
                )));
            }
        }

        for fruit in &self.fruits {
            if fruit.name.trim().is_empty() || fruit.color.trim().is_empty() {
                return Err(SeedError::Catalog(
                    "fruit name and color must not be empty".to_string(),
                ));
            }
            if !fruit.price_per_kg.is_finite() || fruit.price_per_kg < 0.0 {
                return Err(SeedError::Catalog(format!(
                    "fruit '{}' has an invalid price",
                    fruit.name
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded {
        fruits: usize,
        suppliers: usize,
        links: usize,
    },
    Skipped {
        existing_fruits: u64,
    },
}

/// Inserts the catalog in one transaction when the fruits table is empty.
pub async fn seed_if_empty(
    db: &DatabaseConnection,
    catalog: &SeedCatalog,
) -> Result<SeedOutcome, SeedError> {
    let txn = db.begin().await?;

    let existing_fruits = fruits::Entity::find().count(&txn).await?;
    if existing_fruits > 0 {
        return Ok(SeedOutcome::Skipped { existing_fruits });
    }

    let mut supplier_by_country: HashMap<&str, i32> = HashMap::new();
    for supplier in &catalog.suppliers {
        let inserted = suppliers::ActiveModel {
            name: Set(supplier.name.clone()),
            country: Set(supplier.country.clone()),
            contact_email: Set(supplier.contact_email.clone()),
            rating: Set(supplier.rating),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        supplier_by_country.insert(supplier.country.as_str(), inserted.id);
    }

    let now = Utc::now().naive_utc();
    let mut links = 0;
    for seed in &catalog.fruits {
        let fruit = fruits::ActiveModel {
            name: Set(seed.name.clone()),
            color: Set(seed.color.clone()),
            taste: Set(Some(seed.taste.clone())),
            origin_country: Set(Some(seed.origin_country.clone())),
            price_per_kg: Set(Some(seed.price_per_kg)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let nutrition = &seed.nutrition;
        nutritional_info::ActiveModel {
            fruit_id: Set(fruit.id),
            calories: Set(nutrition.calories),
            carbohydrates: Set(nutrition.carbohydrates),
            protein: Set(nutrition.protein),
            fat: Set(nutrition.fat),
            fiber: Set(nutrition.fiber),
            vitamins: Set(nutrition.vitamins.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(&supplier_id) = supplier_by_country.get(seed.origin_country.as_str()) {
            fruit_suppliers::Entity::insert(fruit_suppliers::ActiveModel {
                fruit_id: Set(fruit.id),
                supplier_id: Set(supplier_id),
            })
            .exec(&txn)
            .await?;
            links += 1;
        }
    }

    txn.commit().await?;

    Ok(SeedOutcome::Seeded {
        fruits: catalog.fruits.len(),
        suppliers: catalog.suppliers.len(),
        links,
    })
}

/// Startup hook: a failed seed is logged and the service keeps running.
pub async fn initialize(db: &DatabaseConnection, config: &SeedConfig) -> Option<SeedOutcome> {
    let catalog = match SeedCatalog::from_config(config) {
        Ok(Some(catalog)) => catalog,
        Ok(None) => {
            info!("Seeding disabled");
            return None;
        }
        Err(e) => {
            error!(error = %e, "Error loading seed catalog");
            return None;
        }
    };

    match seed_if_empty(db, &catalog).await {
        Ok(outcome) => {
            match outcome {
                SeedOutcome::Seeded { .. } => {
                    info!(?outcome, "Database initialized with seed data")
                }
                SeedOutcome::Skipped { .. } => {
                    info!(?outcome, "Database already populated, skipping seed")
                }
            }
            Some(outcome)
        }
        Err(e) => {
            error!(error = %e, "Error initializing data");
            None
        }
    }
}
