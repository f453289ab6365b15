use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_user_lifecycle() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/users")
        .json(&common::create_test_user_json("Alice", "Alice@Example.com"))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json::<Value>()["data"].clone();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["email"], "alice@example.com");

    // The password and its hash never leave the server
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let response = server.get(&format!("/users/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], created);

    let response = server
        .put(&format!("/users/{}", id))
        .json(&json!({
            "name": "Alice Cooper",
            "email": "alice.cooper@example.com",
            "password": "another-long-secret"
        }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json::<Value>()["data"].clone();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Alice Cooper");
    assert_eq!(updated["created_at"], created["created_at"]);

    server
        .delete(&format!("/users/{}", id))
        .await
        .assert_status_ok();
    server
        .get(&format!("/users/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/users/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_validation() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let cases = [
        json!({"name": "Bob", "email": "not-an-email", "password": "long-enough-pw"}),
        json!({"name": "", "email": "bob@example.com", "password": "long-enough-pw"}),
        json!({"name": "Bob", "email": "bob@example.com", "password": "short"}),
        json!({"name": "Bob", "email": "bob@example.com"}),
    ];

    for payload in cases {
        let response = server.post("/users").json(&payload).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["status"], "fail");
    }
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    server
        .post("/users")
        .json(&common::create_test_user_json("Alice", "alice@example.com"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/users")
        .json(&common::create_test_user_json("Impostor", "ALICE@example.com"))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .put("/users/77")
        .json(&common::create_test_user_json("Nobody", "nobody@example.com"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
