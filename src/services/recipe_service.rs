//! Recipe service - list/filter, fetch, create and delete.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MISSING_FIELDS_MESSAGE;
use crate::domain::{IdAssignment, IdGenerator, NewRecipe, Recipe, RecipeFilter, Record};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{repositories::duplicate_id, RecordStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Recipe service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Recipes matching every present filter, in store order
    async fn list_recipes(&self, filter: RecipeFilter) -> AppResult<Vec<Recipe>>;

    /// Get recipe by id
    async fn get_recipe(&self, id: String) -> AppResult<Recipe>;

    /// Create a recipe. `id` is required with client-assigned ids and
    /// ignored with server-assigned ones.
    async fn create_recipe(&self, id: Option<String>, recipe: NewRecipe) -> AppResult<Recipe>;

    /// Delete recipe by id, returning the removed record
    async fn delete_recipe(&self, id: String) -> AppResult<Recipe>;
}

/// Concrete implementation of RecipeService over a record store.
pub struct RecipeManager {
    store: Arc<dyn RecordStore<Recipe>>,
    ids: Arc<dyn IdGenerator>,
    assignment: IdAssignment,
}

impl RecipeManager {
    pub fn new(
        store: Arc<dyn RecordStore<Recipe>>,
        ids: Arc<dyn IdGenerator>,
        assignment: IdAssignment,
    ) -> Self {
        Self {
            store,
            ids,
            assignment,
        }
    }
}

#[async_trait]
impl RecipeService for RecipeManager {
    async fn list_recipes(&self, filter: RecipeFilter) -> AppResult<Vec<Recipe>> {
        if filter.is_empty() {
            return self.store.list().await;
        }

        let matches = |recipe: &Recipe| filter.matches(recipe);
        self.store.find_where(&matches).await
    }

    async fn get_recipe(&self, id: String) -> AppResult<Recipe> {
        self.store
            .find_by_id(&id)
            .await?
            .ok_or_not_found(Recipe::ENTITY)
    }

    async fn create_recipe(&self, id: Option<String>, recipe: NewRecipe) -> AppResult<Recipe> {
        let created = match self.assignment {
            IdAssignment::Client => {
                let id = id
                    .filter(|id| !id.trim().is_empty())
                    .ok_or_else(|| AppError::validation(MISSING_FIELDS_MESSAGE))?;

                self.store
                    .insert_with(Box::new(move |existing: &[Recipe]| {
                        if existing.iter().any(|r| r.id == id) {
                            return Err(duplicate_id::<Recipe>());
                        }
                        Ok(recipe.with_id(id))
                    }))
                    .await?
            }
            IdAssignment::Server => {
                if let Some(ignored) = id {
                    tracing::debug!(client_id = %ignored, "Ignoring client-supplied recipe id");
                }

                let ids = self.ids.clone();
                self.store
                    .insert_with(Box::new(move |existing: &[Recipe]| {
                        let taken: Vec<&str> = existing.iter().map(Record::id).collect();
                        Ok(recipe.with_id(ids.next_id(Recipe::ID_PREFIX, &taken)))
                    }))
                    .await?
            }
        };

        tracing::info!(recipe_id = %created.id, "Recipe created");
        Ok(created)
    }

    async fn delete_recipe(&self, id: String) -> AppResult<Recipe> {
        let deleted = self
            .store
            .delete_by_id(&id)
            .await?
            .ok_or_not_found(Recipe::ENTITY)?;

        tracing::info!(recipe_id = %deleted.id, "Recipe deleted");
        Ok(deleted)
    }
}
