//! Bookings service

use crate::{
    config::PaginationConfig,
    error::AppResult,
    forms::{validate_form, FieldErrors},
    models::{
        book::Book,
        booking::{Booking, BookingDetails, BookingForm},
    },
    pagination::Pagination,
    repository::Repository,
};

pub const MY_BOOKINGS_PATH: &str = "/mybookings";

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl BookingsService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Book the booking form is opened for
    pub async fn bookable(&self, book_id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(book_id).await
    }

    /// Book a title for `user_id`; the book becomes unavailable
    pub async fn create(&self, user_id: i32, form: &BookingForm) -> AppResult<Result<Booking, FieldErrors>> {
        if let Err(errors) = validate_form(form) {
            return Ok(Err(errors));
        }
        let booking = match form.to_booking(user_id) {
            Ok(booking) => booking,
            Err(errors) => return Ok(Err(errors)),
        };

        let created = self.repository.bookings.create(&booking).await?;
        tracing::info!(booking_id = created.id, user_id, book_id = created.book_id, "Booking created");
        Ok(Ok(created))
    }

    pub async fn list_for_user(&self, user_id: i32, page: i64) -> AppResult<(Vec<BookingDetails>, Pagination)> {
        let total = self.repository.bookings.count_for_user(user_id).await?;
        let pagination = Pagination::new(MY_BOOKINGS_PATH, page, self.pagination.bookings, total);
        let bookings = self
            .repository
            .bookings
            .list_page_for_user(user_id, pagination.limit, pagination.offset)
            .await?;
        Ok((bookings, pagination))
    }
}
