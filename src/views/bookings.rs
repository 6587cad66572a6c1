//! Booking pages

use maud::{html, Markup};

use super::{field_error, layout, pagination_controls};
use crate::{
    forms::FieldErrors,
    models::{
        book::Book,
        booking::{BookingDetails, BookingForm},
    },
    pagination::Pagination,
};

pub fn form(book: &Book, form: &BookingForm, errors: &FieldErrors) -> Markup {
    layout(
        &format!("Book \"{}\"", book.book_name),
        true,
        html! {
            form method="post" action="/bookings/store" {
                input type="hidden" name="book_id" value=(book.id);
                p {
                    label for="start_time" { "Start" }
                    br;
                    input id="start_time" type="datetime-local" name="start_time" value=(form.start_time);
                    (field_error(errors, "start_time"))
                }
                p {
                    label for="end_time" { "End" }
                    br;
                    input id="end_time" type="datetime-local" name="end_time" value=(form.end_time);
                    (field_error(errors, "end_time"))
                }
                button type="submit" { "Book" }
            }
            p { a href="/book/list" { "Back to books" } }
        },
    )
}

pub fn my_bookings(bookings: &[BookingDetails], pagination: &Pagination) -> Markup {
    layout(
        "My bookings",
        true,
        html! {
            @if bookings.is_empty() {
                p { "You have no bookings yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Book" } th { "Start" } th { "End" } }
                    }
                    tbody {
                        @for booking in bookings {
                            tr {
                                td {
                                    a href={ "/book/" (booking.book_id) "/bookdetails" } {
                                        (booking.book_name.as_deref().unwrap_or("(removed)"))
                                    }
                                }
                                td { (booking.start_display()) }
                                td { (booking.end_display()) }
                            }
                        }
                    }
                }
            }
            (pagination_controls(pagination))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_carries_book_id() {
        let book = Book {
            id: 8,
            category_id: 1,
            book_name: "Dune".into(),
            author_name: "Frank Herbert".into(),
            details: "Desert planet".into(),
            image: "image/dune.png".into(),
            status: true,
        };
        let html = form(&book, &BookingForm::default(), &FieldErrors::single("end_time", "Required")).into_string();
        assert!(html.contains(r#"name="book_id" value="8""#));
        assert!(html.contains("Required"));
    }

    #[test]
    fn test_empty_bookings() {
        let html = my_bookings(&[], &Pagination::new("/mybookings", 1, 4, 0)).into_string();
        assert!(html.contains("You have no bookings yet."));
    }
}
