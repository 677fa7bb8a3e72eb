//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the
//! storage they run on.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Storage;
use crate::services::{RecipeService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Recipe service
    pub recipe_service: Arc<dyn RecipeService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Record stores, kept for health checks
    pub storage: Storage,
}

impl AppState {
    /// Create application state from storage and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_storage(storage: Storage, config: &Config) -> Self {
        let container = Services::from_storage(&storage, config);

        Self {
            recipe_service: container.recipes(),
            user_service: container.users(),
            storage,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        recipe_service: Arc<dyn RecipeService>,
        user_service: Arc<dyn UserService>,
        storage: Storage,
    ) -> Self {
        Self {
            recipe_service,
            user_service,
            storage,
        }
    }
}
