//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching what the API returns
//! - Input DTOs for inserts and updates

pub mod author;
pub mod book;
