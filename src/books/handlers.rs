//! HTTP handlers for the book endpoints.
//!
//! All routes here sit behind the identity middleware. Update and delete
//! share the ownership-checked mutation flow: load the record (absent is
//! 404), compare its owner against the authenticated id (mismatch is 403,
//! nothing mutated), and only then apply the change. The existence check
//! runs strictly before the ownership check on both paths so the observable
//! error codes stay consistent.

use axum::extract::{Path, State};
use axum::response::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::books::db::{
    self, create_book, delete_book, get_book_by_id, list_books_by_owner, update_book,
};
use crate::books::types::{
    AddBookRequest, DeleteBookResponse, UpdateBookRequest, UpdateBookResponse,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::validation::{self, Constraint, FieldRule};

/// GET /api/books/fetchallbooks — list the caller's books.
pub async fn fetchallbooks(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<db::Book>>, ApiError> {
    let books = list_books_by_owner(&pool, user_id).await?;
    Ok(Json(books))
}

/// POST /api/books/addbook — create a book owned by the caller.
///
/// The owner is always the authenticated identity; nothing in the body can
/// set or override it.
pub async fn addbook(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<AddBookRequest>,
) -> Result<Json<db::Book>, ApiError> {
    let rules = [
        FieldRule {
            field: "title",
            value: &request.title,
            constraints: &[Constraint::MinLen(5)],
        },
        FieldRule {
            field: "author",
            value: &request.author,
            constraints: &[Constraint::MinLen(5)],
        },
        FieldRule {
            field: "genre",
            value: &request.genre,
            constraints: &[Constraint::MinLen(5)],
        },
        FieldRule {
            field: "status",
            value: &request.status,
            constraints: &[Constraint::MinLen(4)],
        },
    ];

    let violations = validation::evaluate(&rules);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let book = create_book(
        &pool,
        user_id,
        &request.title,
        &request.author,
        &request.genre,
        request.description.as_deref(),
        &request.status,
    )
    .await?;

    tracing::info!(book_id = %book.id, user_id = %user_id, "book added");

    Ok(Json(book))
}

/// PUT /api/books/updatebook/{id} — sparse update, owner only.
pub async fn updatebook(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(book_id): Path<Uuid>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<UpdateBookResponse>, ApiError> {
    let book = get_book_by_id(&pool, book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if book.user_id != user_id {
        tracing::warn!(book_id = %book_id, user_id = %user_id, "update on someone else's book");
        return Err(ApiError::Forbidden);
    }

    let changes = request.into_changes();
    if changes.is_empty() {
        // Nothing to apply; the record as loaded is the result.
        return Ok(Json(UpdateBookResponse { book }));
    }

    let book = update_book(&pool, book_id, &changes).await?;

    tracing::info!(book_id = %book_id, user_id = %user_id, "book updated");

    Ok(Json(UpdateBookResponse { book }))
}

/// DELETE /api/books/deletebook/{id} — owner only.
pub async fn deletebook(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<DeleteBookResponse>, ApiError> {
    let book = get_book_by_id(&pool, book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if book.user_id != user_id {
        tracing::warn!(book_id = %book_id, user_id = %user_id, "delete on someone else's book");
        return Err(ApiError::Forbidden);
    }

    delete_book(&pool, book_id).await?;

    tracing::info!(book_id = %book_id, user_id = %user_id, "book deleted");

    Ok(Json(DeleteBookResponse {
        success: true,
        message: "Removed the book from your library".to_string(),
    }))
}
