//! HTTP handlers, route table and session gates

pub mod auth;
pub mod bookings;
pub mod books;
pub mod categories;
pub mod health;
pub mod home;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    session::{SessionUser, LOGIN_PATH},
    AppState,
};

/// `?search=` query of the search pages
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

/// Only signed-in visitors get through; everyone else is sent to the login page
pub async fn require_session(session: Option<SessionUser>, request: Request, next: Next) -> Response {
    match session {
        Some(_) => next.run(request).await,
        None => Redirect::temporary(LOGIN_PATH).into_response(),
    }
}

/// Signed-in visitors have no business on the login and registration pages
pub async fn require_guest(session: Option<SessionUser>, request: Request, next: Next) -> Response {
    match session {
        Some(_) => Redirect::temporary("/").into_response(),
        None => next.run(request).await,
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let guest = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/registration", get(auth::signup_page).post(auth::signup))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_guest));

    let protected = Router::new()
        // Categories
        .route("/category/create", get(categories::create))
        .route("/category/store", post(categories::store))
        .route("/category/list", get(categories::list))
        .route("/category/search", get(categories::search))
        .route("/category/:id/edit", get(categories::edit))
        .route("/category/:id/update", post(categories::update))
        .route("/category/:id/delete", post(categories::delete))
        // Books
        .route("/book/create", get(books::create))
        .route("/book/store", post(books::store))
        .route("/book/list", get(books::list))
        .route("/book/search", get(books::search))
        .route("/book/:id/edit", get(books::edit))
        .route("/book/:id/update", post(books::update))
        .route("/book/:id/delete", post(books::delete))
        .route("/book/:id/bookdetails", get(books::details))
        // Bookings
        .route("/bookings/:id/create", get(bookings::create))
        .route("/bookings/store", post(bookings::store))
        .route("/mybookings", get(bookings::my_bookings))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let assets = ServeDir::new(&state.config.assets.dir);

    Router::new()
        .route("/", get(home::home))
        .route("/logout", get(auth::logout).post(auth::logout))
        .route("/resetpassword", get(auth::reset_password))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(guest)
        .merge(protected)
        .nest_service("/asset", assets)
        .fallback(home::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
