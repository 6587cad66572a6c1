//! Category model

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use crate::forms::checkbox;

/// Category row from the `categories` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Whether the category is active
    pub status: bool,
}

/// Create/update category form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryForm {
    #[serde(default)]
    #[validate(length(min = 3, message = "The name must be at least 3 characters"))]
    pub name: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub status: bool,
}

impl CategoryForm {
    /// Form with surrounding whitespace removed, checked and stored as is
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        }
    }
}

impl From<&Category> for CategoryForm {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            status: category.status,
        }
    }
}
