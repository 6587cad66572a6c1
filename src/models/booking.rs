//! Booking model

use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use crate::forms::FieldErrors;

/// Format produced by `<input type="datetime-local">`
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used when listing bookings
pub const DISPLAY_FORMAT: &str = "%a %b %e %Y %H:%M";

/// Booking row from the `bookings` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Booking joined with the booked book's name
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookingDetails {
    pub id: i32,
    pub book_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub book_name: Option<String>,
}

impl BookingDetails {
    pub fn start_display(&self) -> String {
        self.start_time.format(DISPLAY_FORMAT).to_string()
    }

    pub fn end_display(&self) -> String {
        self.end_time.format(DISPLAY_FORMAT).to_string()
    }
}

/// Booking form, posted from the book's booking page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookingForm {
    pub book_id: i32,
    #[serde(default)]
    #[validate(length(min = 1, message = "The start time field is required"))]
    pub start_time: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The end time field is required"))]
    pub end_time: String,
}

/// Validated booking ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub user_id: i32,
    pub book_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Parse a `datetime-local` value, seconds optional
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

impl BookingForm {
    /// Turn the raw times into a booking for `user_id`, recording a field error per bad value
    pub fn to_booking(&self, user_id: i32) -> Result<NewBooking, FieldErrors> {
        let mut errors = FieldErrors::new();

        let start_time = parse_datetime_local(&self.start_time);
        if start_time.is_none() {
            errors.insert("start_time", "The start time is not a valid date and time");
        }
        let end_time = parse_datetime_local(&self.end_time);
        if end_time.is_none() {
            errors.insert("end_time", "The end time is not a valid date and time");
        }

        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) if end_time > start_time => Ok(NewBooking {
                user_id,
                book_id: self.book_id,
                start_time,
                end_time,
            }),
            (Some(_), Some(_)) => Err(FieldErrors::single(
                "end_time",
                "The end time must be after the start time",
            )),
            _ => Err(errors),
        }
    }
}
