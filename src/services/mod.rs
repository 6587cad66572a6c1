//! Business logic services

pub mod auth;
pub mod bookings;
pub mod catalog;

use crate::{config::PaginationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub bookings: bookings::BookingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone(), pagination.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), pagination),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping_database(&self) -> Result<(), sqlx::Error> {
        self.repository.ping().await
    }
}
