use crate::types::DbId;

/// Domain errors shared by every layer.
///
/// The HTTP layer maps each variant to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of `entity` has the given id.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The request is missing a required field or references an unknown author.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write would break a reference between authors and books.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
