//! Handlers for the `/authors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_core::validation::AuthorPayload;
use bookshelf_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use bookshelf_db::repositories::AuthorRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(authors))
}

/// GET /authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Author>> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Author", id))?;
    Ok(Json(author))
}

/// POST /authors
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AuthorPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let name = input
        .into_name()
        .ok_or_else(|| CoreError::Validation("Author name is required".to_string()))?;

    let author = AuthorRepo::create(&state.pool, &CreateAuthor { name }).await?;
    tracing::info!(author_id = author.id, "Author created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created(
            "Author added successfully",
            author.id,
        )),
    ))
}

/// PUT /authors/{id}
///
/// Renaming never touches the author's books, so it is allowed whether or
/// not any book references the author.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AuthorPayload>,
) -> AppResult<Json<MessageResponse>> {
    let name = input
        .into_name()
        .ok_or_else(|| CoreError::Validation("Author name is required.".to_string()))?;

    AuthorRepo::update(&state.pool, id, &UpdateAuthor { name })
        .await?
        .ok_or_else(|| CoreError::not_found("Author", id))?;
    tracing::info!(author_id = id, "Author updated");

    Ok(Json(MessageResponse::new("Author updated successfully")))
}
