//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    BookingStore, JwtTokenService, MongoBookingStore, MongoServiceCatalog, ServiceCatalog,
    TokenService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Token issuance and verification
    pub tokens: Arc<dyn TokenService>,
    /// Read access to the services collection
    pub catalog: Arc<dyn ServiceCatalog>,
    /// CRUD access to the bookings collection
    pub bookings: Arc<dyn BookingStore>,
}

impl AppState {
    /// Create application state from the database connection and config.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        Self {
            tokens: Arc::new(JwtTokenService::new(config)),
            catalog: Arc::new(MongoServiceCatalog::new(database.services())),
            bookings: Arc::new(MongoBookingStore::new(database.bookings())),
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        tokens: Arc<dyn TokenService>,
        catalog: Arc<dyn ServiceCatalog>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            tokens,
            catalog,
            bookings,
        }
    }
}
