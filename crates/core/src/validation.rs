//! Request payloads and the rules that decide whether they are usable.
//!
//! Payload fields are all `Option` so that a missing field reaches the
//! handler as a validation failure (400) instead of a JSON rejection.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Body of `POST /authors` and `PUT /authors/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl AuthorPayload {
    /// Consume the payload, returning the name if it is present and non-empty.
    pub fn into_name(self) -> Option<String> {
        if self.validate().is_err() {
            return None;
        }
        self.name
    }
}

/// Body of `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub genre: Option<String>,
    #[validate(required, range(min = 1))]
    pub author_id: Option<DbId>,
}

/// A book payload with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub genre: String,
    pub author_id: DbId,
}

impl BookPayload {
    /// Consume the payload, returning its fields if all of them are usable.
    pub fn into_fields(self) -> Option<BookFields> {
        if self.validate().is_err() {
            return None;
        }
        match (self.name, self.genre, self.author_id) {
            (Some(name), Some(genre), Some(author_id)) => Some(BookFields {
                name,
                genre,
                author_id,
            }),
            _ => None,
        }
    }
}

/// Which book write produced a missing-field error. The two endpoints
/// have always worded the message differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookWrite {
    Create,
    Update,
}

/// Error for a book payload with missing fields. Lists the author ids a
/// caller may reference.
pub fn missing_book_fields(write: BookWrite, author_ids: &[DbId]) -> CoreError {
    let prefix = match write {
        BookWrite::Create => "Book name, genre and author id is required.",
        BookWrite::Update => "Book name, genre, or author ID is required.",
    };
    CoreError::Validation(format!("{prefix} Possible author IDs: {author_ids:?}"))
}

/// Error for a book that references an author id with no matching row.
pub fn unknown_author() -> CoreError {
    CoreError::Validation("Author with the specified ID does not exist".to_string())
}
