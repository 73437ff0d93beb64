//! Registration handler for POST /api/auth/createuser.
//!
//! Validates the body, rejects duplicate emails, hashes the password, and
//! returns a signed token so the new account is authenticated immediately.

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AuthTokenResponse, CreateUserRequest};
use crate::auth::passwords::PasswordHasher;
use crate::auth::sessions::TokenService;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::validation::{self, Constraint, FieldRule};

pub async fn createuser(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    let rules = [
        FieldRule {
            field: "name",
            value: &request.name,
            constraints: &[Constraint::MinLen(5)],
        },
        FieldRule {
            field: "email",
            value: &request.email,
            constraints: &[Constraint::Email],
        },
        FieldRule {
            field: "password",
            value: &request.password,
            constraints: &[Constraint::MinLen(5)],
        },
    ];

    let violations = validation::evaluate(&rules);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    // Pre-check for a friendlier conflict error; the unique index on email
    // remains the backstop for concurrent registrations.
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!(email = %request.email, "registration with existing email");
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = passwords.hash(&request.password).await?;

    let user = create_user(&pool, &request.name, &request.email, &password_hash).await?;

    let auth_token = tokens.issue(user.id).map_err(ApiError::Token)?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(AuthTokenResponse {
        success: true,
        auth_token,
    }))
}
