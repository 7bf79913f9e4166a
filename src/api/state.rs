//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, ProductStore, UserStore};
use crate::services::{AuthService, Authenticator, ProductManager, ProductService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    ///
    /// Wires the repository and service graph explicitly; there is no
    /// ambient registry.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let connection = database.get_connection();
        let users = Arc::new(UserStore::new(connection.clone()));
        let products = Arc::new(ProductStore::new(connection));

        let auth_service = Arc::new(Authenticator::new(
            users,
            config.jwt_secret().to_string(),
            config.jwt_expiration_hours,
        ));
        let product_service = Arc::new(ProductManager::new(products));

        Self {
            auth_service,
            product_service,
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
            database,
        }
    }
}
