//! Repository for the `books` table.
//!
//! Reads served to API callers join `authors` so each book carries its
//! author's name.

use bookshelf_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::book::{Book, BookWithAuthor, CreateBook, UpdateBook};

/// Column list shared across queries that return a raw `books` row.
const COLUMNS: &str = "id, name, genre, author_id";

/// Select clause for a book joined with its author's name.
const JOINED_SELECT: &str = "SELECT b.id, b.name, b.genre, a.name AS author
     FROM books b
     JOIN authors a ON a.id = b.author_id";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    ///
    /// Fails with a foreign key violation if `author_id` has no matching author.
    pub async fn create(pool: &SqlitePool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (name, genre, author_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID, joined with its author's name.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<BookWithAuthor>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE b.id = ?1");
        sqlx::query_as::<_, BookWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a book with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all books in insertion order, joined with their authors' names.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BookWithAuthor>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY b.id");
        sqlx::query_as::<_, BookWithAuthor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a book.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                name = ?2,
                genre = ?3,
                author_id = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(input.author_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a book by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
