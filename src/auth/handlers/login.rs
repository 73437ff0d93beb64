//! Login handler for POST /api/auth/login.
//!
//! Unknown email and wrong password take the same exit: the response must
//! not reveal which half of the credentials failed.

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AuthTokenResponse, LoginRequest};
use crate::auth::passwords::PasswordHasher;
use crate::auth::sessions::TokenService;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::validation::{self, Constraint, FieldRule};

pub async fn login(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    let rules = [
        FieldRule {
            field: "email",
            value: &request.email,
            constraints: &[Constraint::Email],
        },
        FieldRule {
            field: "password",
            value: &request.password,
            constraints: &[Constraint::MinLen(1)],
        },
    ];

    let violations = validation::evaluate(&rules);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %request.email, "login with unknown email");
            ApiError::InvalidCredentials
        })?;

    if !passwords.verify(&request.password, &user.password_hash).await {
        tracing::warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let auth_token = tokens.issue(user.id).map_err(ApiError::Token)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(AuthTokenResponse {
        success: true,
        auth_token,
    }))
}
