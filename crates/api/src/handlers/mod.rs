//! Request handlers for authors and books.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create, update and, for books, delete). Handlers validate the request,
//! delegate to the corresponding repository in `bookshelf_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod author;
pub mod book;
