mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{seeded_app, spawn_app};
use serde_json::{Value, json};

#[tokio::test]
async fn test_root_and_health() -> Result<()> {
    let app = spawn_app().await?;

    let (status, body) = app.get("/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Fruits API");
    assert_eq!(body["docs_url"], "/docs");
    assert_eq!(body["redoc_url"], "/redoc");

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[tokio::test]
async fn test_health_reports_unhealthy_store() -> Result<()> {
    let app = spawn_app().await?;
    app.store.connection().clone().close().await?;

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");

    Ok(())
}

#[tokio::test]
async fn test_store_failure_returns_500() -> Result<()> {
    let app = spawn_app().await?;
    app.store.connection().clone().close().await?;

    assert_detail!(
        app.get("/api/v1/fruits").await?,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database error"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_and_get_fruit() -> Result<()> {
    let app = spawn_app().await?;

    let (status, created) = app
        .post("/api/v1/fruits", json!({"fruit": "Mango", "color": "Orange"}))
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["fruit"], "Mango");
    assert_eq!(created["color"], "Orange");
    let id = created["id"].as_i64().unwrap_or_default();
    assert!(id > 0);

    let (status, fetched) = app.get(&format!("/api/v1/fruits/{id}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    Ok(())
}

#[tokio::test]
async fn test_get_missing_fruit_returns_404() -> Result<()> {
    let app = spawn_app().await?;
    assert_detail!(
        app.get("/api/v1/fruits/9999").await?,
        StatusCode::NOT_FOUND,
        "Fruit not found"
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_fruit_id_returns_400() -> Result<()> {
    let app = spawn_app().await?;
    let (status, body) = app.get("/api/v1/fruits/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_create_fruit_validation() -> Result<()> {
    let app = spawn_app().await?;

    assert_detail!(
        app.post("/api/v1/fruits", json!({"fruit": "", "color": "Red"}))
            .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "fruit must not be empty"
    );
    assert_detail!(
        app.post("/api/v1/fruits", json!({"fruit": "Plum", "color": "   "}))
            .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "color must not be empty"
    );
    assert_detail!(
        app.post(
            "/api/v1/fruits",
            json!({"fruit": "x".repeat(51), "color": "Red"})
        )
        .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "at most 50"
    );

    let (status, _) = app
        .post("/api/v1/fruits", json!({"fruit": "Plum"}))
        .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app.get("/api/v1/fruits").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_rejected() -> Result<()> {
    let app = spawn_app().await?;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/fruits")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;

    let (status, body) = app.send(request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_list_fruits_in_creation_order() -> Result<()> {
    let app = spawn_app().await?;
    for (fruit, color) in [("Cherry", "Red"), ("Lime", "Green"), ("Grape", "Purple")] {
        app.post("/api/v1/fruits", json!({"fruit": fruit, "color": color}))
            .await?;
    }

    let (status, body) = app.get("/api/v1/fruits").await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .map(|fruits| fruits.iter().filter_map(|f| f["fruit"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Cherry", "Lime", "Grape"]);

    Ok(())
}

#[tokio::test]
async fn test_list_does_not_seed() -> Result<()> {
    let app = spawn_app().await?;
    let (_, body) = app.get("/api/v1/fruits").await?;
    assert_eq!(body, json!([]));
    let (_, body) = app.get("/api/v1/get_all_data").await?;
    assert_eq!(body["total_fruits"], 0);
    Ok(())
}

#[tokio::test]
async fn test_get_all_data_empty() -> Result<()> {
    let app = spawn_app().await?;
    let (status, body) = app.get("/api/v1/get_all_data").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "fruits": [],
            "total_fruits": 0,
            "total_suppliers": 0,
            "total_nutritional_records": 0
        })
    );
    Ok(())
}

fn find_fruit<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body["fruits"]
        .as_array()?
        .iter()
        .find(|fruit| fruit["name"] == name)
}

#[tokio::test]
async fn test_get_all_data_seeded() -> Result<()> {
    let app = seeded_app().await?;
    app.post("/api/v1/fruits", json!({"fruit": "Pear", "color": "Green"}))
        .await?;

    let (status, body) = app.get("/api/v1/get_all_data").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fruits"], 4);
    assert_eq!(body["total_suppliers"], 3);
    assert_eq!(body["total_nutritional_records"], 3);

    for (fruit, supplier, calories) in [
        ("Apple", "Fresh Farms", 52),
        ("Banana", "Tropical Exports", 89),
        ("Orange", "Global Fruits Co", 47),
    ] {
        let entry = find_fruit(&body, fruit)
            .ok_or_else(|| anyhow::anyhow!("{fruit} missing from aggregate"))?;
        assert_eq!(entry["nutritional_info"]["calories"], calories);
        assert_eq!(entry["suppliers"].as_array().map(Vec::len), Some(1));
        assert_eq!(entry["suppliers"][0]["name"], supplier);
    }

    let pear = find_fruit(&body, "Pear").ok_or_else(|| anyhow::anyhow!("Pear missing"))?;
    assert_eq!(pear["nutritional_info"], Value::Null);
    assert_eq!(pear["suppliers"], json!([]));
    assert_eq!(pear["price_per_kg"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn test_update_fruit() -> Result<()> {
    let app = seeded_app().await?;

    let (status, body) = app
        .put(
            "/api/v1/fruits/1",
            json!({"color": "Green", "price_per_kg": 3.25}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apple");
    assert_eq!(body["color"], "Green");
    assert_eq!(body["taste"], "Sweet");
    assert_eq!(body["price_per_kg"], 3.25);

    assert_detail!(
        app.put("/api/v1/fruits/1", json!({"price_per_kg": -1.0}))
            .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "non-negative"
    );
    assert_detail!(
        app.put("/api/v1/fruits/9999", json!({"color": "Blue"}))
            .await?,
        StatusCode::NOT_FOUND,
        "Fruit not found"
    );

    Ok(())
}

#[tokio::test]
async fn test_update_rejects_invalid_origin_country() -> Result<()> {
    let app = seeded_app().await?;

    assert_detail!(
        app.put("/api/v1/fruits/1", json!({"origin_country": "   "}))
            .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "origin_country must not be empty"
    );
    assert_detail!(
        app.put("/api/v1/fruits/1", json!({"origin_country": "x".repeat(101)}))
            .await?,
        StatusCode::UNPROCESSABLE_ENTITY,
        "at most 100"
    );

    let (_, body) = app.get("/api/v1/get_all_data").await?;
    let apple = find_fruit(&body, "Apple").ok_or_else(|| anyhow::anyhow!("Apple missing"))?;
    assert_eq!(apple["origin_country"], "USA");

    Ok(())
}

#[tokio::test]
async fn test_update_null_clears_nullable_columns() -> Result<()> {
    let app = seeded_app().await?;

    let (status, body) = app
        .put("/api/v1/fruits/1", json!({"taste": null, "price_per_kg": null}))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["taste"], Value::Null);
    assert_eq!(body["price_per_kg"], Value::Null);
    assert_eq!(body["origin_country"], "USA");

    let (status, body) = app
        .put("/api/v1/fruits/1", json!({"color": "Green"}))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["taste"], Value::Null);
    assert_eq!(body["origin_country"], "USA");

    Ok(())
}

#[tokio::test]
async fn test_delete_fruit_removes_related_rows() -> Result<()> {
    let app = seeded_app().await?;

    let (status, body) = app.delete("/api/v1/fruits/2").await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    assert_detail!(
        app.get("/api/v1/fruits/2").await?,
        StatusCode::NOT_FOUND,
        "Fruit not found"
    );
    assert_detail!(
        app.delete("/api/v1/fruits/2").await?,
        StatusCode::NOT_FOUND,
        "Fruit not found"
    );

    let (_, body) = app.get("/api/v1/get_all_data").await?;
    assert_eq!(body["total_fruits"], 2);
    assert_eq!(body["total_suppliers"], 3);
    assert_eq!(body["total_nutritional_records"], 2);

    Ok(())
}
