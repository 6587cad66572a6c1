//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookWithCategory},
};

const SELECT_WITH_CATEGORY: &str = r#"
    SELECT b.id, b.category_id, b.book_name, b.author_name, b.details, b.image, b.status,
           c.name AS category_name
    FROM books b
    LEFT JOIN categories c ON c.id = b.category_id
"#;

/// Column values written by create and update
#[derive(Debug, Clone)]
pub struct BookRecord<'a> {
    pub category_id: i32,
    pub book_name: &'a str,
    pub author_name: &'a str,
    pub details: &'a str,
    pub image: &'a str,
    pub status: bool,
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Get book by ID along with its category name
    pub async fn get_with_category(&self, id: i32) -> AppResult<BookWithCategory> {
        let query = format!("{} WHERE b.id = $1", SELECT_WITH_CATEGORY);
        sqlx::query_as::<_, BookWithCategory>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// One page of books in insertion order
    pub async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<BookWithCategory>> {
        let query = format!("{} ORDER BY b.id LIMIT $1 OFFSET $2", SELECT_WITH_CATEGORY);
        let rows = sqlx::query_as::<_, BookWithCategory>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on the book name. `pattern` is already LIKE-escaped.
    pub async fn search(&self, pattern: &str) -> AppResult<Vec<BookWithCategory>> {
        let query = format!(
            "{} WHERE b.book_name ILIKE '%' || $1 || '%' ESCAPE '\\' ORDER BY b.id",
            SELECT_WITH_CATEGORY
        );
        let rows = sqlx::query_as::<_, BookWithCategory>(&query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, record: &BookRecord<'_>) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (category_id, book_name, author_name, details, image, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(record.category_id)
        .bind(record.book_name)
        .bind(record.author_name)
        .bind(record.details)
        .bind(record.image)
        .bind(record.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, record: &BookRecord<'_>) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET category_id = $2, book_name = $3, author_name = $4, details = $5, image = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(record.category_id)
        .bind(record.book_name)
        .bind(record.author_name)
        .bind(record.details)
        .bind(record.image)
        .bind(record.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
