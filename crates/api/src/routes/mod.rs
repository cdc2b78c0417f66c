pub mod author;
pub mod book;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                 list, create
/// /authors/{id}            get, update
///
/// /books                   list, create
/// /books/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", author::router())
        .nest("/books", book::router())
}
