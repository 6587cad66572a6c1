//! Category endpoints

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
    models::category::CategoryForm,
    pagination::PageQuery,
    services::catalog::CATEGORY_LIST_PATH,
    views::{self, FormMode},
    AppState,
};

pub async fn create() -> Markup {
    views::categories::form(FormMode::Create, &CategoryForm::default(), &FieldErrors::new())
}

pub async fn store(State(state): State<AppState>, Form(form): Form<CategoryForm>) -> AppResult<Response> {
    match state.services.catalog.create_category(&form).await? {
        Ok(_) => Ok(Redirect::to(CATEGORY_LIST_PATH).into_response()),
        Err(errors) => Ok(views::categories::form(FormMode::Create, &form, &errors).into_response()),
    }
}

pub async fn list(State(state): State<AppState>, Query(query): Query<PageQuery>) -> AppResult<Markup> {
    let (categories, pagination) = state.services.catalog.list_categories(query.page()?).await?;
    Ok(views::categories::list(&categories, Some(&pagination), None))
}

pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> AppResult<Markup> {
    let categories = state.services.catalog.search_categories(&query.search).await?;
    Ok(views::categories::list(&categories, None, Some(&query.search)))
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let category = state.services.catalog.get_category(id).await?;
    Ok(views::categories::form(
        FormMode::Edit(id),
        &CategoryForm::from(&category),
        &FieldErrors::new(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CategoryForm>,
) -> AppResult<Response> {
    match state.services.catalog.update_category(id, &form).await? {
        Ok(_) => Ok(Redirect::to(CATEGORY_LIST_PATH).into_response()),
        Err(errors) => Ok(views::categories::form(FormMode::Edit(id), &form, &errors).into_response()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Redirect> {
    state.services.catalog.delete_category(id).await?;
    Ok(Redirect::to(CATEGORY_LIST_PATH))
}
