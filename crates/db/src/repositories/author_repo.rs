//! Repository for the `authors` table.

use bookshelf_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

/// Provides create, read and update operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        sqlx::query_as::<_, Author>("INSERT INTO authors (name) VALUES (?1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an author by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all authors in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Author>, sqlx::Error> {
        sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// IDs of every author, ascending.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM authors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Whether an author with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite an author's name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = ?2 WHERE id = ?1 RETURNING id, name",
        )
        .bind(id)
        .bind(&input.name)
        .fetch_optional(pool)
        .await
    }
}
