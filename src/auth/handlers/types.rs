//! Request and response types for the authentication handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Registration request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Hashed before storage, never persisted as-is.
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by createuser and login: the signed token for subsequent
/// authenticated requests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenResponse {
    pub success: bool,
    pub auth_token: String,
}

/// User projection safe to return to clients: no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Response body for getuser.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub success: bool,
    pub user: UserResponse,
}
