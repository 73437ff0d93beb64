//! Shared fixtures for the integration tests.

pub mod auth_helpers;
pub mod database;
