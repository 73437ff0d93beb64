//! API route tables
//!
//! Two routers: the public authentication endpoints, and the protected
//! surface that sits behind the identity middleware. The middleware is
//! applied in `router.rs` so this module stays a plain route listing.
//!
//! # Routes
//!
//! ## Public
//! - `POST /api/auth/createuser` - Register a new account
//! - `POST /api/auth/login` - Authenticate, returns a token
//!
//! ## Protected (require `Authorization: Bearer <token>`)
//! - `POST /api/auth/getuser` - Current user's profile
//! - `GET /api/books/fetchallbooks` - List the caller's books
//! - `POST /api/books/addbook` - Add a book owned by the caller
//! - `PUT /api/books/updatebook/{id}` - Sparse update, owner only
//! - `DELETE /api/books/deletebook/{id}` - Delete, owner only

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth::{createuser, getuser, login};
use crate::books::{addbook, deletebook, fetchallbooks, updatebook};
use crate::server::state::AppState;

/// Routes reachable without a token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/createuser", post(createuser))
        .route("/api/auth/login", post(login))
}

/// Routes that require an authenticated identity.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/getuser", post(getuser))
        .route("/api/books/fetchallbooks", get(fetchallbooks))
        .route("/api/books/addbook", post(addbook))
        .route("/api/books/updatebook/{id}", put(updatebook))
        .route("/api/books/deletebook/{id}", delete(deletebook))
}
