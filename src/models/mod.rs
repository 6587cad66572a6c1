//! Data models for the library

pub mod book;
pub mod booking;
pub mod category;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookForm, BookWithCategory};
pub use booking::{Booking, BookingDetails, BookingForm, NewBooking};
pub use category::{Category, CategoryForm};
pub use user::{LoginForm, SignUpForm, User};
