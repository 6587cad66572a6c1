//! Book pages

use maud::{html, Markup};

use super::{field_error, layout, pagination_controls, search_box, text_field, FormMode};
use crate::{
    forms::FieldErrors,
    models::{
        book::{BookForm, BookWithCategory},
        category::Category,
    },
    pagination::Pagination,
};

fn image_url(image: &str) -> String {
    format!("/asset/{}", image.trim_start_matches('/'))
}

fn availability(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Booked"
    }
}

pub fn form(mode: FormMode, form: &BookForm, categories: &[Category], errors: &FieldErrors) -> Markup {
    let (title, action) = match mode {
        FormMode::Create => ("New book".to_string(), "/book/store".to_string()),
        FormMode::Edit(id) => ("Edit book".to_string(), format!("/book/{}/update", id)),
    };

    layout(
        &title,
        true,
        html! {
            form method="post" action=(action) {
                p {
                    label for="category_id" { "Category" }
                    br;
                    select id="category_id" name="category_id" {
                        option value="" { "Choose a category" }
                        @for category in categories {
                            option value=(category.id) selected[form.category_id == Some(category.id)] {
                                (category.name)
                            }
                        }
                    }
                    (field_error(errors, "category_id"))
                }
                (text_field(errors, "Name", "book_name", "text", &form.book_name))
                (text_field(errors, "Author", "author_name", "text", &form.author_name))
                p {
                    label for="details" { "Details" }
                    br;
                    textarea id="details" name="details" rows="4" { (form.details) }
                    (field_error(errors, "details"))
                }
                (text_field(errors, "Image path", "image", "text", &form.image))
                p {
                    label {
                        input type="checkbox" name="status" checked[form.status];
                        " Available"
                    }
                }
                button type="submit" { "Save" }
            }
            p { a href="/book/list" { "Back to books" } }
        },
    )
}

/// Book table. `pagination` is absent for search results.
pub fn list(books: &[BookWithCategory], pagination: Option<&Pagination>, search: Option<&str>) -> Markup {
    layout(
        "Books",
        true,
        html! {
            p { a href="/book/create" { "New book" } }
            (search_box("/book/search", search))
            @if books.is_empty() {
                p { "No books found." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "#" } th { "Name" } th { "Author" } th { "Category" }
                            th { "Status" } th { "Actions" }
                        }
                    }
                    tbody {
                        @for book in books {
                            tr {
                                td { (book.id) }
                                td { a href={ "/book/" (book.id) "/bookdetails" } { (book.book_name) } }
                                td { (book.author_name) }
                                td { (book.category_name.as_deref().unwrap_or("-")) }
                                td { (availability(book.status)) }
                                td {
                                    @if book.status {
                                        a href={ "/bookings/" (book.id) "/create" } { "Book" }
                                        " "
                                    }
                                    a href={ "/book/" (book.id) "/edit" } { "Edit" }
                                    " "
                                    form.inline method="post" action={ "/book/" (book.id) "/delete" } {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(pagination) = pagination {
                (pagination_controls(pagination))
            }
        },
    )
}

pub fn details(book: &BookWithCategory) -> Markup {
    layout(
        &book.book_name,
        true,
        html! {
            img src=(image_url(&book.image)) alt=(book.book_name) width="200";
            dl {
                dt { "Author" } dd { (book.author_name) }
                dt { "Category" } dd { (book.category_name.as_deref().unwrap_or("-")) }
                dt { "Status" } dd { (availability(book.status)) }
                dt { "Details" } dd { (book.details) }
            }
            @if book.status {
                p { a href={ "/bookings/" (book.id) "/create" } { "Book this title" } }
            }
            p { a href="/book/list" { "Back to books" } }
        },
    )
}
