//! Authentication helpers for the integration tests.

use axum_test::TestServer;
use sqlx::SqlitePool;

use shelfmark::auth::passwords::PasswordHasher;
use shelfmark::auth::sessions::TokenService;
use shelfmark::routes::router::create_router;
use shelfmark::server::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build the application state used by the tests. Minimum bcrypt cost keeps
/// the suite fast; hashing strength is covered by the unit tests.
pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        db_pool: pool,
        tokens: TokenService::new(TEST_SECRET),
        passwords: PasswordHasher::new(4),
    }
}

/// Spin up a test server over the real router.
pub fn test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(create_router(test_state(pool))).expect("failed to start test server")
}

/// Register a user through the API and return the auth token.
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/createuser")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true, "registration failed: {body}");

    body["authToken"]
        .as_str()
        .expect("registration response missing authToken")
        .to_string()
}

/// Bearer header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
