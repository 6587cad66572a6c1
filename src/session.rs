//! Cookie session: the signed-in user's id, carried in a signed cookie

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::{config::SessionConfig, AppState};

pub const LOGIN_PATH: &str = "/login";

/// Signing key for the session cookie.
/// SHA-512 stretches the configured secret to the 64 bytes a `Key` needs.
pub fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Signed-in user of the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i32,
}

impl SessionUser {
    /// Read the session out of a cookie jar; tampered or malformed values count as no session
    pub fn from_jar(jar: &SignedCookieJar, config: &SessionConfig) -> Option<Self> {
        jar.get(&config.cookie_name)
            .and_then(|cookie| cookie.value().parse().ok())
            .map(|user_id| SessionUser { user_id })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
        SessionUser::from_jar(&jar, &state.config.session)
            .ok_or_else(|| Redirect::temporary(LOGIN_PATH))
    }
}

/// Store `user_id` in the session cookie
pub fn sign_in(jar: SignedCookieJar, config: &SessionConfig, user_id: i32) -> SignedCookieJar {
    let cookie = Cookie::build((config.cookie_name.clone(), user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure);
    jar.add(cookie)
}

/// Clear the session cookie
pub fn sign_out(jar: SignedCookieJar, config: &SessionConfig) -> SignedCookieJar {
    jar.remove(Cookie::build((config.cookie_name.clone(), "")).path("/"))
}
