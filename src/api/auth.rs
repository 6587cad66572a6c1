//! Login, registration and logout endpoints

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use maud::Markup;

use crate::{
    error::AppResult,
    forms::FieldErrors,
    models::user::{LoginForm, SignUpForm},
    services::catalog::BOOK_LIST_PATH,
    session::{self, SessionUser, LOGIN_PATH},
    views, AppState,
};

pub async fn login_page() -> Markup {
    views::auth::login(&LoginForm::default(), &FieldErrors::new())
}

/// Check credentials; on success start the session and go to the book list
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match state.services.auth.authenticate(&form).await? {
        Ok(user) => {
            let jar = session::sign_in(jar, &state.config.session, user.id);
            Ok((jar, Redirect::to(BOOK_LIST_PATH)).into_response())
        }
        Err(errors) => Ok(views::auth::login(&form, &errors).into_response()),
    }
}

pub async fn signup_page() -> Markup {
    views::auth::signup(&SignUpForm::default(), &FieldErrors::new())
}

pub async fn signup(State(state): State<AppState>, Form(form): Form<SignUpForm>) -> AppResult<Response> {
    match state.services.auth.register(&form).await? {
        Ok(_) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(errors) => Ok(views::auth::signup(&form.without_passwords(), &errors).into_response()),
    }
}

pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::sign_out(jar, &state.config.session), Redirect::to(LOGIN_PATH))
}

pub async fn reset_password(session: Option<SessionUser>) -> Markup {
    views::auth::reset_password(session.is_some())
}
