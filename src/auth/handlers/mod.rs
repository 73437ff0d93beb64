//! HTTP handlers for the authentication endpoints.

pub mod createuser;
pub mod getuser;
pub mod login;
pub mod types;

pub use createuser::createuser;
pub use getuser::getuser;
pub use login::login;
