use anyhow::Result;
use tracing::info;

use crate::{
    api::{self, AppState},
    config::AppConfig,
    database::connect_app_db,
    seed,
    store::FruitStore,
};

pub async fn execute_serve(config: AppConfig) -> Result<()> {
    info!(
        environment = %config.environment,
        database = %config.database.ty,
        "Starting Fruits API"
    );

    let db = connect_app_db(&config.database).await?;
    seed::initialize(&db, &config.seed).await;

    let state = AppState::new(FruitStore::new(db), config.environment.clone());
    api::serve(&config, state).await
}
