//! Categories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryForm},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// All categories, for the book form's category picker
    pub async fn list_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// One page of categories in insertion order
    pub async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on the name. `pattern` is already LIKE-escaped.
    pub async fn search(&self, pattern: &str) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE name ILIKE '%' || $1 || '%' ESCAPE '\\' ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, form: &CategoryForm) -> AppResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, status) VALUES ($1, $2) RETURNING *",
        )
        .bind(&form.name)
        .bind(form.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, form: &CategoryForm) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, status = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&form.name)
        .bind(form.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
