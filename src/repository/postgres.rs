//! PostgreSQL-backed repository. Every operation is a single statement, so
//! atomicity comes from the database; no application-level transactions.

use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use crate::repository::BookRepository;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, page_count, category, author";

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, new: NewBook) -> Result<Book, AppError> {
        tracing::debug!(name = %new.name, "insert book");
        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (name, page_count, category, author) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&new.name)
        .bind(new.page_count)
        .bind(&new.category)
        .bind(&new.author)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!("SELECT {COLUMNS} FROM books"))
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn update(&self, id: i32, patch: BookPatch) -> Result<Option<Book>, AppError> {
        tracing::debug!(id, "update book");
        let book = sqlx::query_as::<_, Book>(&format!(
            "UPDATE books SET \
                name = COALESCE($2, name), \
                page_count = COALESCE($3, page_count), \
                category = COALESCE($4, category), \
                author = COALESCE($5, author) \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.page_count)
        .bind(patch.category)
        .bind(patch.author)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "delete book");
        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
