//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - The identity provider admin API client

pub mod db;
pub mod identity;
pub mod repositories;

pub use db::{Database, Migrator};
pub use identity::{IdentityProvider, KeycloakAdmin};
pub use repositories::*;

#[cfg(any(test, feature = "test-utils"))]
pub use identity::MockIdentityProvider;
