//! Server initialization
//!
//! Connects the database, runs migrations, builds the shared state from the
//! loaded settings, and hands back the configured router.

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

use crate::auth::passwords::PasswordHasher;
use crate::auth::sessions::TokenService;
use crate::routes::router::create_router;
use crate::server::config::Settings;
use crate::server::state::AppState;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create the Axum application from loaded settings.
pub async fn create_app(settings: &Settings) -> Result<Router, InitError> {
    tracing::info!(database_url = %settings.database_url, "connecting to database");

    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState {
        db_pool: pool,
        tokens: TokenService::new(&settings.jwt_secret),
        passwords: PasswordHasher::new(settings.bcrypt_cost),
    };

    Ok(create_router(state))
}
