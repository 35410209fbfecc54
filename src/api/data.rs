use super::{AppError, AppState};
use crate::store::AllData;
use axum::{Json, Router, extract::State, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/get_all_data", get(get_all_data))
}

async fn get_all_data(State(state): State<AppState>) -> Result<Json<AllData>, AppError> {
    let data = state.store.get_all_data().await?;
    Ok(Json(data))
}
