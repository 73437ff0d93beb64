//! Authentication: credential storage, password hashing, token issuance,
//! and the register/login/profile handlers.

pub mod handlers;
pub mod passwords;
pub mod sessions;
pub mod users;

pub use handlers::{createuser, getuser, login};
