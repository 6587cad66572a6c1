//! HTML pages, rendered with maud

pub mod auth;
pub mod bookings;
pub mod books;
pub mod categories;

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::{forms::FieldErrors, pagination::Pagination};

/// Whether a form creates a new record or edits record `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

/// Page skeleton with the navigation bar
pub fn layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Library" }
                link rel="stylesheet" href="/asset/style.css";
            }
            body {
                nav {
                    a href="/" { "Library" }
                    @if signed_in {
                        a href="/book/list" { "Books" }
                        a href="/category/list" { "Categories" }
                        a href="/mybookings" { "My bookings" }
                        form.inline method="post" action="/logout" {
                            button type="submit" { "Logout" }
                        }
                    } @else {
                        a href="/login" { "Login" }
                        a href="/registration" { "Register" }
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

/// Inline message under a form field
pub fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            div.error { (message) }
        }
    }
}

/// Text input with its label and error
pub(crate) fn text_field(errors: &FieldErrors, label: &str, name: &str, kind: &str, value: &str) -> Markup {
    html! {
        p {
            label for=(name) { (label) }
            br;
            input id=(name) type=(kind) name=(name) value=(value);
            (field_error(errors, name))
        }
    }
}

/// Numbered page links with previous/next
pub fn pagination_controls(pagination: &Pagination) -> Markup {
    html! {
        @if pagination.total_pages > 1 {
            div.pagination {
                @if let Some(url) = &pagination.previous_url {
                    a href=(url) { "« Previous" }
                }
                @for link in &pagination.pages {
                    @if link.page_number == pagination.current_page {
                        span.current { (link.page_number) }
                    } @else {
                        a href=(link.url) { (link.page_number) }
                    }
                }
                @if let Some(url) = &pagination.next_url {
                    a href=(url) { "Next »" }
                }
            }
        }
    }
}

/// Search box posting `search` to `action`
pub(crate) fn search_box(action: &str, term: Option<&str>) -> Markup {
    html! {
        form method="get" action=(action) {
            input type="search" name="search" placeholder="Search" value=(term.unwrap_or_default());
            button type="submit" { "Search" }
        }
    }
}

pub fn home(signed_in: bool) -> Markup {
    layout(
        "Welcome",
        signed_in,
        html! {
            @if signed_in {
                p { "Browse the " a href="/book/list" { "books" } " or check " a href="/mybookings" { "your bookings" } "." }
            } @else {
                p { a href="/login" { "Sign in" } " or " a href="/registration" { "create an account" } " to book titles." }
            }
        },
    )
}

pub fn not_found() -> Markup {
    layout(
        "Page not found",
        false,
        html! {
            p { "The page you asked for does not exist." }
            p { a href="/" { "Back to the home page" } }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        status.canonical_reason().unwrap_or("Error"),
        false,
        html! {
            p { (message) }
        },
    )
}
