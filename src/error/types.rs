//! API error taxonomy
//!
//! Every failure a handler can surface is one of these variants. Client
//! mistakes carry enough detail to act on; server-side failures are logged
//! and collapse to a generic 500 body so raw errors never reach the client.

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::passwords::PasswordError;
use crate::validation::Violation;

/// All errors that can be returned from a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed declarative validation.
    #[error("validation failed")]
    Validation(Vec<Violation>),

    /// Registration attempted with an email that already has an account.
    #[error("email already registered")]
    DuplicateEmail,

    /// Login failed. Deliberately identical whether the email was unknown
    /// or the password was wrong, to avoid account enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid token on a protected route.
    #[error("authentication required")]
    Unauthenticated,

    /// Target record does not exist.
    #[error("not found")]
    NotFound,

    /// Authenticated, but not the owner of the target record.
    #[error("not allowed")]
    Forbidden,

    /// Unexpected storage failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Password(#[from] PasswordError),

    /// Token issuance failed.
    #[error("token issuance failed: {0}")]
    Token(#[source] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Password(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client.
    ///
    /// Server-side failures all share one generic message; the detail only
    /// goes to the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation failed",
            Self::DuplicateEmail => "This email id already exists",
            Self::InvalidCredentials => "Invalid credentials",
            Self::Unauthenticated => "Please authenticate using a valid token",
            Self::NotFound => "Not found",
            Self::Forbidden => "Not allowed",
            Self::Database(_) | Self::Password(_) | Self::Token(_) => "Some error occurred",
        }
    }
}

/// Storage errors become API errors here. A unique violation can only come
/// from the email index, so it maps to the registration conflict; anything
/// else is an internal failure.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::DuplicateEmail;
            }
        }
        Self::Database(err)
    }
}
