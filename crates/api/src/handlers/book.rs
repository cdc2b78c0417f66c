//! Handlers for the `/books` resource.
//!
//! Writes check, in order: that every field is present (listing the author
//! ids a caller may use when one is not), that the book exists (updates and
//! deletes), and that `author_id` names an existing author. Nothing is
//! written until all checks pass.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_core::validation::{missing_book_fields, unknown_author, BookPayload, BookWrite};
use bookshelf_db::models::book::{BookWithAuthor, CreateBook, UpdateBook};
use bookshelf_db::repositories::{AuthorRepo, BookRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn book_not_found(id: DbId) -> AppError {
    CoreError::not_found("Book", id).into()
}

/// GET /books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BookWithAuthor>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<BookWithAuthor>> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| book_not_found(id))?;
    Ok(Json(book))
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Some(fields) = input.into_fields() else {
        let author_ids = AuthorRepo::list_ids(&state.pool).await?;
        return Err(missing_book_fields(BookWrite::Create, &author_ids).into());
    };

    if !AuthorRepo::exists(&state.pool, fields.author_id).await? {
        return Err(unknown_author().into());
    }

    let book = BookRepo::create(&state.pool, &CreateBook::from(fields)).await?;
    tracing::info!(book_id = book.id, author_id = book.author_id, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Book added successfully", book.id)),
    ))
}

/// PUT /books/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    let Some(fields) = input.into_fields() else {
        let author_ids = AuthorRepo::list_ids(&state.pool).await?;
        return Err(missing_book_fields(BookWrite::Update, &author_ids).into());
    };

    if !BookRepo::exists(&state.pool, id).await? {
        return Err(book_not_found(id));
    }

    if !AuthorRepo::exists(&state.pool, fields.author_id).await? {
        return Err(unknown_author().into());
    }

    let book = BookRepo::update(&state.pool, id, &UpdateBook::from(fields))
        .await?
        .ok_or_else(|| book_not_found(id))?;
    tracing::info!(book_id = book.id, author_id = book.author_id, "Book updated");

    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// DELETE /books/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !BookRepo::delete(&state.pool, id).await? {
        return Err(book_not_found(id));
    }
    tracing::info!(book_id = id, "Book deleted");

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
