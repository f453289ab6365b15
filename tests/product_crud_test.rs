use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_widget_lifecycle() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/products")
        .json(&json!({"name": "Widget", "price": 9.99, "quantity": 5}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Product created successfully");
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["data"]["name"], "Widget");

    let response = server.get(&format!("/products/{}", id)).await;
    response.assert_status_ok();
    let fetched: Value = response.json();
    assert_eq!(fetched["data"], body["data"]);

    let response = server.delete(&format!("/products/{}", id)).await;
    response.assert_status_ok();
    let deleted: Value = response.json();
    assert_eq!(deleted["status"], "success");
    assert!(deleted.get("data").is_none());

    let response = server.get(&format!("/products/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let missing: Value = response.json();
    assert_eq!(missing["status"], "fail");
}

#[tokio::test]
async fn test_create_via_legacy_path_and_form_aliases() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    // Storefront form field names
    let response = server
        .post("/products/create")
        .json(&json!({
            "name": "Laptop",
            "price": 1299.5,
            "quantity": 3,
            "type": "electronics",
            "specifications": "16GB RAM",
            "warranty": 24
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let product: Value = response.json::<Value>()["data"].clone();
    assert_eq!(product["category"], "electronics");
    assert_eq!(product["description"], "16GB RAM");
    assert_eq!(product["warranty_months"], 24);
    assert!(product["created_at"].is_string());
    assert!(product["brand"].is_null());
}

#[tokio::test]
async fn test_update_replaces_product() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/products")
        .json(&common::create_test_product_json("Drill", 89.0, 4))
        .await;
    let created: Value = response.json::<Value>()["data"].clone();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/products/{}", id))
        .json(&json!({"name": "Cordless Drill", "price": 99.0, "quantity": 2}))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json::<Value>()["data"].clone();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Cordless Drill");
    assert_eq!(updated["quantity"], 2);
    assert_eq!(updated["created_at"], created["created_at"]);
    // Full replacement clears fields that were left out
    assert!(updated["brand"].is_null());
    assert_eq!(updated["description"], "");

    let response = server.get(&format!("/products/{}", id)).await;
    assert_eq!(response.json::<Value>()["data"], updated);
}

#[tokio::test]
async fn test_update_and_delete_missing_product() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .put("/products/4242")
        .json(&common::create_test_product_json("Ghost", 1.0, 1))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.delete("/products/4242").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/products")
        .json(&common::create_test_product_json("Hammer", 15.0, 10))
        .await;
    let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

    server
        .delete(&format!("/products/{}", id))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/products/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_products() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    for i in 0..3 {
        server
            .post("/products")
            .json(&common::create_test_product_json(&format!("Item {}", i), 1.0, i))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.delete("/products/deleteAll").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["deleted"], 3);

    let response = server.get("/products").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], json!([]));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete_all() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/products")
        .json(&common::create_test_product_json("First", 1.0, 1))
        .await;
    let first_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

    server.delete("/products/deleteAll").await.assert_status_ok();

    let response = server
        .post("/products")
        .json(&common::create_test_product_json("Second", 1.0, 1))
        .await;
    let second_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

    assert!(second_id > first_id);
    server
        .get(&format!("/products/{}", first_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
