//! Application state
//!
//! `AppState` is the single state container handed to the router. The
//! `FromRef` implementations let handlers extract just the piece they need
//! (pool, token service, hasher) instead of the whole struct.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::passwords::PasswordHasher;
use crate::auth::sessions::TokenService;

/// Shared state for all request handlers.
///
/// Every field is cheaply cloneable; the pool is internally reference
/// counted and the token keys are immutable after construction.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}
