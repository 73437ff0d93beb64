//! Server startup: configuration, shared state, and app construction.

pub mod config;
pub mod init;
pub mod state;
