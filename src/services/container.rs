//! Service Container - Centralized service access.
//!
//! Wires every service to its record store, id policy and login mode, so
//! the HTTP layer only ever sees service traits.

use std::sync::Arc;

use super::{RecipeManager, RecipeService, UserManager, UserService};
use crate::config::Config;
use crate::infra::Storage;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get recipe service
    fn recipes(&self) -> Arc<dyn RecipeService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    recipe_service: Arc<dyn RecipeService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Build every service over `storage` using the id and login policy in `config`
    pub fn from_storage(storage: &Storage, config: &Config) -> Self {
        let ids = config.id_strategy.generator();
        let assignment = config.id_assignment();
        tracing::debug!(ids = %config.id_strategy, ?assignment, "Building services");

        let recipe_service = Arc::new(RecipeManager::new(
            storage.recipes(),
            ids.clone(),
            assignment,
        ));
        let user_service = Arc::new(
            UserManager::new(storage.users(), ids, assignment)
                .with_demo_mode(config.insecure_demo_mode),
        );

        Self {
            recipe_service,
            user_service,
        }
    }
}

impl ServiceContainer for Services {
    fn recipes(&self) -> Arc<dyn RecipeService> {
        self.recipe_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
