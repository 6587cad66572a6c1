//! Book model

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use crate::forms::{checkbox, optional_id};

/// Book row from the `books` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i32,
    pub category_id: i32,
    pub book_name: String,
    pub author_name: String,
    pub details: String,
    /// Path of the cover image, relative to the asset directory
    pub image: String,
    /// Whether the book is available for booking
    pub status: bool,
}

/// Book joined with the name of its category, for display
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookWithCategory {
    pub id: i32,
    pub category_id: i32,
    pub book_name: String,
    pub author_name: String,
    pub details: String,
    pub image: String,
    pub status: bool,
    /// `None` when the category no longer exists
    pub category_name: Option<String>,
}

/// Create/update book form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default, deserialize_with = "optional_id")]
    #[validate(required(message = "Please choose a category"))]
    pub category_id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 3, message = "The book name must be at least 3 characters"))]
    pub book_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The author name field is required"))]
    pub author_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The details field is required"))]
    pub details: String,
    /// Empty on update keeps the current image
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub status: bool,
}

impl BookForm {
    /// Form with surrounding whitespace removed from every text field
    pub fn trimmed(&self) -> Self {
        Self {
            book_name: self.book_name.trim().to_string(),
            author_name: self.author_name.trim().to_string(),
            details: self.details.trim().to_string(),
            image: self.image.trim().to_string(),
            ..self.clone()
        }
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            category_id: Some(book.category_id),
            book_name: book.book_name.clone(),
            author_name: book.author_name.clone(),
            details: book.details.clone(),
            image: book.image.clone(),
            status: book.status,
        }
    }
}
