//! Request and response types for the book handlers.

use serde::{Deserialize, Serialize};

use crate::books::db::{Book, BookChanges};

/// Body for POST /api/books/addbook.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for PUT /api/books/updatebook/{id}. All fields optional: a sparse
/// update applies only what the client supplied.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl UpdateBookRequest {
    /// Normalize into store-level changes: absent fields and empty strings
    /// are both treated as "leave untouched".
    pub fn into_changes(self) -> BookChanges {
        BookChanges {
            title: non_empty(self.title),
            author: non_empty(self.author),
            genre: non_empty(self.genre),
            description: non_empty(self.description),
            status: non_empty(self.status),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body for PUT /api/books/updatebook/{id} responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateBookResponse {
    pub book: Book,
}

/// Body for DELETE /api/books/deletebook/{id} responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBookResponse {
    pub success: bool,
    pub message: String,
}
