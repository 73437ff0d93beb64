//! Authentication API integration tests
//!
//! Registration, login, and profile retrieval through the real router over
//! an in-memory database.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::auth_helpers::{bearer, register_user, test_server, TEST_SECRET};
use common::database::TestDatabase;
use shelfmark::auth::sessions::TokenService;
use shelfmark::auth::users::get_user_by_email;

#[tokio::test]
async fn createuser_returns_token() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    let response = server
        .post("/api/auth/createuser")
        .json(&serde_json::json!({
            "name": "Alice Smith",
            "email": "a@x.com",
            "password": "secret",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["authToken"].as_str().is_some_and(|t| !t.is_empty()));

    // Exactly one row was created and the token binds its id.
    let user = get_user_by_email(db.pool(), "a@x.com")
        .await
        .unwrap()
        .expect("user row missing after registration");
    let verified = TokenService::new(TEST_SECRET)
        .verify(body["authToken"].as_str().unwrap())
        .unwrap();
    assert_eq!(verified, user.id);
}

#[tokio::test]
async fn createuser_stores_hash_not_password() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    register_user(&server, "Alice Smith", "a@x.com", "secret").await;

    let user = get_user_by_email(db.pool(), "a@x.com").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "secret");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn createuser_rejects_duplicate_email() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    register_user(&server, "Alice Smith", "a@x.com", "secret").await;

    let response = server
        .post("/api/auth/createuser")
        .json(&serde_json::json!({
            "name": "Other Alice",
            "email": "a@x.com",
            "password": "different",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);

    // No second row appeared.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind("a@x.com")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn createuser_validates_fields() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    let response = server
        .post("/api/auth/createuser")
        .json(&serde_json::json!({
            "name": "Bob",
            "email": "not-an-email",
            "password": "pw",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);

    let violations = body["error"].as_array().expect("field-level detail");
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
}

#[tokio::test]
async fn login_returns_usable_token() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    register_user(&server, "Alice Smith", "a@x.com", "secret").await;

    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "secret",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["authToken"].as_str().unwrap();

    // The fresh token works against a protected route.
    let me = server
        .post("/api/auth/getuser")
        .add_header("Authorization", bearer(token))
        .await;
    assert_eq!(me.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    register_user(&server, "Alice Smith", "a@x.com", "secret").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "wrong",
        }))
        .await;

    let unknown_email = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "email": "nobody@x.com",
            "password": "secret",
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);

    // Identical bodies: no account enumeration oracle.
    let a: serde_json::Value = wrong_password.json();
    let b: serde_json::Value = unknown_email.json();
    assert_eq!(a, b);
}

#[tokio::test]
async fn getuser_returns_profile_without_hash() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    let token = register_user(&server, "Alice Smith", "a@x.com", "secret").await;

    let response = server
        .post("/api/auth/getuser")
        .add_header("Authorization", bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "Alice Smith");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn protected_route_rejects_missing_token() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    let response = server.post("/api/auth/getuser").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_rejects_garbage_token() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    let response = server
        .post("/api/auth/getuser")
        .add_header("Authorization", "Bearer not.a.token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool().clone());

    register_user(&server, "Alice Smith", "a@x.com", "secret").await;
    let user = get_user_by_email(db.pool(), "a@x.com").await.unwrap().unwrap();

    // A structurally valid token for a real user, but wrong signature.
    let forged = TokenService::new("some-other-secret").issue(user.id).unwrap();

    let response = server
        .post("/api/auth/getuser")
        .add_header("Authorization", bearer(&forged))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
