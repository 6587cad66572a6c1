//! Bookings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingDetails, NewBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert the booking and mark the book unavailable in one transaction
    pub async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, book_id, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.book_id)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query("UPDATE books SET status = FALSE WHERE id = $1")
            .bind(booking.book_id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            // dropping tx rolls the insert back
            return Err(AppError::NotFound(format!("Book {} not found", booking.book_id)));
        }

        tx.commit().await?;
        Ok(row)
    }

    pub async fn count_for_user(&self, user_id: i32) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// One page of a user's bookings with the booked book's name
    pub async fn list_page_for_user(
        &self,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query_as::<_, BookingDetails>(
            r#"
            SELECT bk.id, bk.book_id, bk.start_time, bk.end_time, b.book_name
            FROM bookings bk
            LEFT JOIN books b ON b.id = bk.book_id
            WHERE bk.user_id = $1
            ORDER BY bk.start_time DESC, bk.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
