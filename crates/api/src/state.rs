/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the pool is the only
/// handle handlers have on storage.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: bookshelf_db::DbPool,
}
