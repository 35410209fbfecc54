use crate::config::AppConfig;
use crate::store::{FruitStore, StoreError};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod data;
mod fruits;
mod health;

pub use fruits::{BasicFruit, CreateFruitRequest, UpdateFruitRequest};
pub use health::{HealthResponse, WelcomeResponse};

#[derive(Clone)]
pub struct AppState {
    pub store: FruitStore,
    pub environment: String,
}

impl AppState {
    pub fn new(store: FruitStore, environment: impl Into<String>) -> Self {
        Self {
            store,
            environment: environment.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum AppError {
    StatusCode(StatusCode, String),
    Store(StoreError),
}

pub fn app_error<T>(status: StatusCode, detail: impl Into<String>) -> Result<T, AppError> {
    Err(AppError::StatusCode(status, detail.into()))
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::StatusCode(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::StatusCode(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::StatusCode(status, detail) => (status, detail),
            AppError::Store(err @ StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Store(StoreError::Database(err)) => {
                error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {err}"),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(fruits::routes())
        .merge(data::routes());

    Router::new()
        .merge(health::routes())
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
