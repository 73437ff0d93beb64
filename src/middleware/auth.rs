//! Identity middleware
//!
//! The single authentication enforcement point. Protected routes sit behind
//! `require_auth`, which extracts the bearer token, verifies its signature,
//! and attaches the resolved user id to the request. Handlers never re-check
//! token validity; they only check ownership.
//!
//! Missing header, wrong scheme, and bad signature all produce the same
//! uniform 401 so the response leaks nothing about why the token failed.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated identity, attached to request extensions by
/// `require_auth` and read back by handlers through the extractor impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Authentication middleware for protected routes.
///
/// Once the signature verifies, the embedded id is trusted as-is; there is
/// no per-request database lookup and no revocation list.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::warn!("missing or malformed authorization header");
        ApiError::Unauthenticated
    })?;

    let user_id = state.tokens.verify(token).map_err(|_| {
        tracing::warn!("token failed verification");
        ApiError::Unauthenticated
    })?;

    request.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            // Only reachable if a handler takes AuthUser on a route that is
            // not behind require_auth.
            tracing::error!("AuthUser extractor used outside the auth middleware");
            ApiError::Unauthenticated
        })
    }
}
