//! Shared response bodies for write endpoints.
//!
//! Reads return the entity (or a list of them) as-is. Writes answer with a
//! short confirmation message, plus the new row's id on creation.

use bookshelf_core::types::DbId;
use serde::Serialize;

/// `{ "message": ..., "id": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    /// Confirmation for a newly created row.
    pub fn created(message: &'static str, id: DbId) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}
