//! Database test fixtures.
//!
//! Each test gets its own in-memory SQLite database with the real
//! migrations applied, so the suite runs without any external services.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test database fixture holding an isolated in-memory pool.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh in-memory database and run migrations.
    ///
    /// The pool is capped at a single connection: every connection to
    /// `sqlite::memory:` is a separate database, so a larger pool would
    /// hand out empty schemas.
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
