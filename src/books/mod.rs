//! Book records: storage operations and the owner-scoped CRUD handlers.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{addbook, deletebook, fetchallbooks, updatebook};
