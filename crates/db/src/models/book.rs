//! Book entity model and DTOs.

use bookshelf_core::types::DbId;
use bookshelf_core::validation::BookFields;
use serde::Serialize;
use sqlx::FromRow;

/// A book row from the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub name: String,
    pub genre: Option<String>,
    pub author_id: DbId,
}

/// A book joined with the name of its author, as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct BookWithAuthor {
    pub id: DbId,
    pub name: String,
    pub genre: Option<String>,
    /// Author name, not the id.
    pub author: String,
}

/// DTO for creating a new book.
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub name: String,
    pub genre: String,
    pub author_id: DbId,
}

/// DTO for replacing the fields of an existing book.
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub name: String,
    pub genre: String,
    pub author_id: DbId,
}

impl From<BookFields> for CreateBook {
    fn from(fields: BookFields) -> Self {
        Self {
            name: fields.name,
            genre: fields.genre,
            author_id: fields.author_id,
        }
    }
}

impl From<BookFields> for UpdateBook {
    fn from(fields: BookFields) -> Self {
        Self {
            name: fields.name,
            genre: fields.genre,
            author_id: fields.author_id,
        }
    }
}
