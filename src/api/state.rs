//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, IdentityProvider};
use crate::services::{ServiceContainer, Services};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// All application services
    pub services: Arc<dyn ServiceContainer>,
    /// Database used by the health check (absent when services are injected)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a database and an identity provider.
    ///
    /// This is the way the server builds its state: every service is
    /// backed by SeaORM repositories sharing one connection pool.
    pub fn from_database(database: Arc<Database>, identity: Arc<dyn IdentityProvider>) -> Self {
        let services = Services::from_connection(database.get_connection(), identity);

        Self {
            services: Arc::new(services),
            database: Some(database),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(services: Arc<dyn ServiceContainer>) -> Self {
        Self {
            services,
            database: None,
        }
    }
}
