//! Home page and not-found fallback

use axum::http::StatusCode;
use maud::Markup;

use crate::{session::SessionUser, views};

pub async fn home(session: Option<SessionUser>) -> Markup {
    views::home(session.is_some())
}

pub async fn not_found() -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, views::not_found())
}
