pub mod aggregate;

use crate::database::entities::{fruit_suppliers, fruits, nutritional_info, suppliers};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use thiserror::Error;

pub use aggregate::{AllData, FruitAggregate, FruitDetail, NutritionSummary, SupplierSummary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFruit {
    pub name: String,
    pub color: String,
}

/// `None` leaves a column untouched. For the nullable columns `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FruitChanges {
    pub name: Option<String>,
    pub color: Option<String>,
    pub taste: Option<Option<String>>,
    pub origin_country: Option<Option<String>>,
    pub price_per_kg: Option<Option<f64>>,
}

#[derive(Clone)]
pub struct FruitStore {
    db: DatabaseConnection,
}

impl FruitStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.db.ping().await?;
        Ok(())
    }

    pub async fn create_fruit(&self, new_fruit: NewFruit) -> StoreResult<fruits::Model> {
        let now = Utc::now().naive_utc();
        let fruit = fruits::ActiveModel {
            name: Set(new_fruit.name),
            color: Set(new_fruit.color),
            taste: Set(None),
            origin_country: Set(None),
            price_per_kg: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(fruit.insert(&self.db).await?)
    }

    pub async fn get_fruit(&self, id: i32) -> StoreResult<fruits::Model> {
        fruits::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Fruit",
                id,
            })
    }

    pub async fn list_fruits(&self) -> StoreResult<Vec<fruits::Model>> {
        Ok(fruits::Entity::find()
            .order_by_asc(fruits::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn update_fruit(&self, id: i32, changes: FruitChanges) -> StoreResult<fruits::Model> {
        let txn = self.db.begin().await?;

        let fruit = fruits::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Fruit",
                id,
            })?;

        let mut fruit_active: fruits::ActiveModel = fruit.into();
        if let Some(name) = changes.name {
            fruit_active.name = Set(name);
        }
        if let Some(color) = changes.color {
            fruit_active.color = Set(color);
        }
        if let Some(taste) = changes.taste {
            fruit_active.taste = Set(taste);
        }
        if let Some(origin_country) = changes.origin_country {
            fruit_active.origin_country = Set(origin_country);
        }
        if let Some(price_per_kg) = changes.price_per_kg {
            fruit_active.price_per_kg = Set(price_per_kg);
        }
        fruit_active.updated_at = Set(Utc::now().naive_utc());

        let updated = fruit_active.update(&txn).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Removes the fruit together with its nutrition record and supplier links.
    pub async fn delete_fruit(&self, id: i32) -> StoreResult<()> {
        let txn = self.db.begin().await?;

        nutritional_info::Entity::delete_many()
            .filter(nutritional_info::Column::FruitId.eq(id))
            .exec(&txn)
            .await?;
        fruit_suppliers::Entity::delete_many()
            .filter(fruit_suppliers::Column::FruitId.eq(id))
            .exec(&txn)
            .await?;

        let result = fruits::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "Fruit",
                id,
            });
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn get_all_data(&self) -> StoreResult<AllData> {
        let txn = self.db.begin().await?;

        let with_nutrition = fruits::Entity::find()
            .find_also_related(nutritional_info::Entity)
            .order_by_asc(fruits::Column::Id)
            .all(&txn)
            .await?;

        let with_suppliers = fruits::Entity::find()
            .find_with_related(suppliers::Entity)
            .order_by_asc(fruits::Column::Id)
            .order_by_asc(suppliers::Column::Id)
            .all(&txn)
            .await?;

        let total_suppliers = suppliers::Entity::find().count(&txn).await?;
        let total_nutritional_records = nutritional_info::Entity::find().count(&txn).await?;

        txn.commit().await?;

        let mut suppliers_by_fruit: HashMap<i32, Vec<suppliers::Model>> = with_suppliers
            .into_iter()
            .map(|(fruit, suppliers)| (fruit.id, suppliers))
            .collect();

        let fruits: Vec<FruitAggregate> = with_nutrition
            .into_iter()
            .map(|(fruit, nutrition)| {
                let suppliers = suppliers_by_fruit.remove(&fruit.id).unwrap_or_default();
                FruitAggregate::assemble(fruit, nutrition, suppliers)
            })
            .collect();

        Ok(AllData {
            total_fruits: fruits.len() as u64,
            total_suppliers,
            total_nutritional_records,
            fruits,
        })
    }
}
