use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use fruits_api::api::{AppState, router};
use fruits_api::config::{DatabaseConfig, SeedConfig};
use fruits_api::database::connect_app_db;
use fruits_api::seed;
use fruits_api::store::FruitStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

#[macro_export]
macro_rules! assert_detail {
    ($response:expr, $status:expr, $expected_substring:expr) => {
        let (status, body) = $response;
        assert_eq!(status, $status, "unexpected status, body: {body}");
        let detail = body["detail"].as_str().unwrap_or_default();
        assert!(
            detail.contains($expected_substring),
            "Error detail should contain '{}', but got: '{}'",
            $expected_substring,
            detail
        );
    };
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: FruitStore,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }
}

pub async fn spawn_app() -> Result<TestApp> {
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("fruits.db");
    let config = DatabaseConfig::sqlite(db_path.to_string_lossy().to_string());

    let db = connect_app_db(&config).await?;
    let store = FruitStore::new(db);
    let router = router(AppState::new(store.clone(), "test"));

    Ok(TestApp {
        router,
        store,
        _temp_dir: temp_dir,
    })
}

#[allow(dead_code)]
pub async fn seeded_app() -> Result<TestApp> {
    let app = spawn_app().await?;
    let outcome = seed::initialize(app.store.connection(), &SeedConfig::Builtin).await;
    assert!(outcome.is_some(), "builtin seed should succeed");
    Ok(app)
}
