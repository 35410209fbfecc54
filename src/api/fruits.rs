use super::{AppError, AppState, app_error};
use crate::database::entities::fruits;
use crate::store::{FruitChanges, FruitDetail, NewFruit};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Deserializer, Serialize};

const MAX_LABEL_LEN: usize = 50;
const MAX_COUNTRY_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicFruit {
    pub id: i32,
    pub fruit: String,
    pub color: String,
}

impl From<fruits::Model> for BasicFruit {
    fn from(model: fruits::Model) -> Self {
        Self {
            id: model.id,
            fruit: model.name,
            color: model.color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFruitRequest {
    pub fruit: String,
    pub color: String,
}

/// Absent fields are left unchanged; an explicit `null` clears a nullable column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFruitRequest {
    pub fruit: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub taste: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub origin_country: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub price_per_kg: Option<Option<f64>>,
}

fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fruits", get(list_fruits).post(create_fruit))
        .route(
            "/fruits/{id}",
            get(get_fruit).put(update_fruit).delete(delete_fruit),
        )
}

fn validate_label(field: &str, value: &str) -> Result<(), AppError> {
    validate_text(field, value, MAX_LABEL_LEN)
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return app_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{field} must not be empty"),
        );
    }
    if value.chars().count() > max_len {
        return app_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{field} must be at most {max_len} characters"),
        );
    }
    Ok(())
}

fn validate_update(req: &UpdateFruitRequest) -> Result<(), AppError> {
    if let Some(fruit) = &req.fruit {
        validate_label("fruit", fruit)?;
    }
    if let Some(color) = &req.color {
        validate_label("color", color)?;
    }
    if let Some(Some(taste)) = &req.taste {
        validate_label("taste", taste)?;
    }
    if let Some(Some(origin_country)) = &req.origin_country {
        validate_text("origin_country", origin_country, MAX_COUNTRY_LEN)?;
    }
    if let Some(Some(price)) = req.price_per_kg
        && (!price.is_finite() || price < 0.0)
    {
        return app_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "price_per_kg must be a non-negative number",
        );
    }
    Ok(())
}

async fn list_fruits(State(state): State<AppState>) -> Result<Json<Vec<BasicFruit>>, AppError> {
    let fruits = state.store.list_fruits().await?;
    Ok(Json(fruits.into_iter().map(BasicFruit::from).collect()))
}

async fn get_fruit(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<BasicFruit>, AppError> {
    let Path(id) = id?;
    let fruit = state.store.get_fruit(id).await?;
    Ok(Json(fruit.into()))
}

async fn create_fruit(
    State(state): State<AppState>,
    payload: Result<Json<CreateFruitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BasicFruit>), AppError> {
    let Json(req) = payload?;
    validate_label("fruit", &req.fruit)?;
    validate_label("color", &req.color)?;

    let fruit = state
        .store
        .create_fruit(NewFruit {
            name: req.fruit,
            color: req.color,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(fruit.into())))
}

async fn update_fruit(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateFruitRequest>, JsonRejection>,
) -> Result<Json<FruitDetail>, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    validate_update(&req)?;

    let fruit = state
        .store
        .update_fruit(
            id,
            FruitChanges {
                name: req.fruit,
                color: req.color,
                taste: req.taste,
                origin_country: req.origin_country,
                price_per_kg: req.price_per_kg,
            },
        )
        .await?;

    Ok(Json(fruit.into()))
}

async fn delete_fruit(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.store.delete_fruit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
