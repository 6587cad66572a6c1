//! Library management server
//!
//! Server-rendered pages for managing the book catalog and its categories,
//! with patron bookings and cookie-session authentication.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod session;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Signs the session cookie
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let cookie_key = session::derive_key(&config.session.secret);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
