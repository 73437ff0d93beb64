//! Shelfmark: a personal library tracking backend.
//!
//! Users register and authenticate, then create, list, update, and delete
//! book records scoped to their own account. Authentication is JWT-based
//! with bcrypt password storage; persistence is SQLite via sqlx.

pub mod auth;
pub mod books;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod validation;
