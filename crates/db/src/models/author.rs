//! Author entity model and DTOs.

use bookshelf_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// An author row from the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}

/// DTO for renaming an existing author.
#[derive(Debug, Clone)]
pub struct UpdateAuthor {
    pub name: String,
}
