//! Repository layer for database operations

pub mod bookings;
pub mod books;
pub mod categories;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub categories: categories::CategoriesRepository,
    pub books: books::BooksRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness check
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
