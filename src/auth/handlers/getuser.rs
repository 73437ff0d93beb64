//! Profile handler for POST /api/auth/getuser.
//!
//! Authentication is enforced by the identity middleware; this handler only
//! loads the profile for the id the middleware attached. The password hash
//! is excluded by the response projection.

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::GetUserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

pub async fn getuser(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<GetUserResponse>, ApiError> {
    let user = get_user_by_id(&pool, user_id).await?.ok_or_else(|| {
        // A verified token naming a missing user: the account row is gone
        // but the signature still stands.
        tracing::warn!(user_id = %user_id, "token for nonexistent user");
        ApiError::NotFound
    })?;

    Ok(Json(GetUserResponse {
        success: true,
        user: user.into(),
    }))
}
