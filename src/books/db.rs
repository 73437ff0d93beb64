//! Book store: database operations for book records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A book row. `user_id` is the owner, set at creation from the
/// authenticated identity and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields applied by a sparse update. `None` leaves the column untouched.
#[derive(Debug, Default, Clone)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

/// List every book owned by a user, in natural storage order.
pub async fn list_books_by_owner(
    pool: &SqlitePool,
    owner_id: Uuid,
) -> Result<Vec<Book>, sqlx::Error> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, user_id, title, author, genre, description, status, created_at
        FROM books
        WHERE user_id = ?
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Create a book owned by `owner_id`.
pub async fn create_book(
    pool: &SqlitePool,
    owner_id: Uuid,
    title: &str,
    author: &str,
    genre: &str,
    description: Option<&str>,
    status: &str,
) -> Result<Book, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let book = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (id, user_id, title, author, genre, description, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, title, author, genre, description, status, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(title)
    .bind(author)
    .bind(genre)
    .bind(description)
    .bind(status)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// Get a book by ID, or `None` if it does not exist.
pub async fn get_book_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, user_id, title, author, genre, description, status, created_at
        FROM books
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(book)
}

/// Sparse update: COALESCE keeps the stored value for every field the
/// caller left out. The owner column is deliberately not updatable.
pub async fn update_book(
    pool: &SqlitePool,
    id: Uuid,
    changes: &BookChanges,
) -> Result<Book, sqlx::Error> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = COALESCE(?, title),
            author = COALESCE(?, author),
            genre = COALESCE(?, genre),
            description = COALESCE(?, description),
            status = COALESCE(?, status)
        WHERE id = ?
        RETURNING id, user_id, title, author, genre, description, status, created_at
        "#,
    )
    .bind(changes.title.as_deref())
    .bind(changes.author.as_deref())
    .bind(changes.genre.as_deref())
    .bind(changes.description.as_deref())
    .bind(changes.status.as_deref())
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// Delete a book by ID.
pub async fn delete_book(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
