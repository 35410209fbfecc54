use crate::database::entities::{fruits, nutritional_info, suppliers};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitDetail {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub taste: Option<String>,
    pub origin_country: Option<String>,
    pub price_per_kg: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<fruits::Model> for FruitDetail {
    fn from(fruit: fruits::Model) -> Self {
        Self {
            id: fruit.id,
            name: fruit.name,
            color: fruit.color,
            taste: fruit.taste,
            origin_country: fruit.origin_country,
            price_per_kg: fruit.price_per_kg,
            created_at: fruit.created_at,
            updated_at: fruit.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub id: i32,
    pub calories: i32,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub vitamins: String,
}

impl From<nutritional_info::Model> for NutritionSummary {
    fn from(info: nutritional_info::Model) -> Self {
        Self {
            id: info.id,
            calories: info.calories,
            carbohydrates: info.carbohydrates,
            protein: info.protein,
            fat: info.fat,
            fiber: info.fiber,
            vitamins: info.vitamins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub contact_email: String,
    pub rating: f64,
}

impl From<suppliers::Model> for SupplierSummary {
    fn from(supplier: suppliers::Model) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            country: supplier.country,
            contact_email: supplier.contact_email,
            rating: supplier.rating,
        }
    }
}

/// A fruit with its one-to-one nutrition record and many-to-many suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitAggregate {
    #[serde(flatten)]
    pub fruit: FruitDetail,
    pub nutritional_info: Option<NutritionSummary>,
    pub suppliers: Vec<SupplierSummary>,
}

impl FruitAggregate {
    pub fn assemble(
        fruit: fruits::Model,
        nutrition: Option<nutritional_info::Model>,
        suppliers: Vec<suppliers::Model>,
    ) -> Self {
        Self {
            fruit: fruit.into(),
            nutritional_info: nutrition.map(Into::into),
            suppliers: suppliers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllData {
    pub fruits: Vec<FruitAggregate>,
    pub total_fruits: u64,
    pub total_suppliers: u64,
    pub total_nutritional_records: u64,
}
