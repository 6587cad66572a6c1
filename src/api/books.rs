//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;

use super::SearchQuery;
use crate::{
    error::AppResult,
    forms::FieldErrors,
    models::book::BookForm,
    pagination::PageQuery,
    services::catalog::BOOK_LIST_PATH,
    views::{self, FormMode},
    AppState,
};

pub async fn create(State(state): State<AppState>) -> AppResult<Markup> {
    let categories = state.services.catalog.all_categories().await?;
    Ok(views::books::form(
        FormMode::Create,
        &BookForm::default(),
        &categories,
        &FieldErrors::new(),
    ))
}

pub async fn store(State(state): State<AppState>, Form(form): Form<BookForm>) -> AppResult<Response> {
    match state.services.catalog.create_book(&form).await? {
        Ok(_) => Ok(Redirect::to(BOOK_LIST_PATH).into_response()),
        Err(errors) => {
            let categories = state.services.catalog.all_categories().await?;
            Ok(views::books::form(FormMode::Create, &form, &categories, &errors).into_response())
        }
    }
}

pub async fn list(State(state): State<AppState>, Query(query): Query<PageQuery>) -> AppResult<Markup> {
    let (books, pagination) = state.services.catalog.list_books(query.page()?).await?;
    Ok(views::books::list(&books, Some(&pagination), None))
}

pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> AppResult<Markup> {
    let books = state.services.catalog.search_books(&query.search).await?;
    Ok(views::books::list(&books, None, Some(&query.search)))
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let book = state.services.catalog.get_book(id).await?;
    let categories = state.services.catalog.all_categories().await?;
    Ok(views::books::form(
        FormMode::Edit(id),
        &BookForm::from(&book),
        &categories,
        &FieldErrors::new(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.update_book(id, &form).await? {
        Ok(_) => Ok(Redirect::to(BOOK_LIST_PATH).into_response()),
        Err(errors) => {
            let categories = state.services.catalog.all_categories().await?;
            Ok(views::books::form(FormMode::Edit(id), &form, &categories, &errors).into_response())
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Redirect> {
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to(BOOK_LIST_PATH))
}

pub async fn details(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let book = state.services.catalog.get_book_details(id).await?;
    Ok(views::books::details(&book))
}
