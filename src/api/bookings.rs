//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;

use crate::{
    error::AppResult,
    forms::FieldErrors,
    models::booking::BookingForm,
    pagination::PageQuery,
    services::catalog::BOOK_LIST_PATH,
    session::SessionUser,
    views, AppState,
};

pub async fn create(State(state): State<AppState>, Path(book_id): Path<i32>) -> AppResult<Markup> {
    let book = state.services.bookings.bookable(book_id).await?;
    let form = BookingForm {
        book_id,
        ..BookingForm::default()
    };
    Ok(views::bookings::form(&book, &form, &FieldErrors::new()))
}

pub async fn store(
    State(state): State<AppState>,
    session: SessionUser,
    Form(form): Form<BookingForm>,
) -> AppResult<Response> {
    match state.services.bookings.create(session.user_id, &form).await? {
        Ok(_) => Ok(Redirect::to(BOOK_LIST_PATH).into_response()),
        Err(errors) => {
            let book = state.services.bookings.bookable(form.book_id).await?;
            Ok(views::bookings::form(&book, &form, &errors).into_response())
        }
    }
}

pub async fn my_bookings(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Markup> {
    let (bookings, pagination) = state
        .services
        .bookings
        .list_for_user(session.user_id, query.page()?)
        .await?;
    Ok(views::bookings::my_bookings(&bookings, &pagination))
}
