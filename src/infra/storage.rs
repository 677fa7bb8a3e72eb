//! Storage bundle - one record store per entity type.
//!
//! Chooses the backend from configuration and hands out the stores as
//! trait objects, so nothing above this layer depends on the backend.

use std::path::Path;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::db::Database;
use super::repositories::{JsonFileStore, RecordStore, SqlStore};
use crate::config::{Config, StorageBackend, RECIPES_FILE, USERS_FILE};
use crate::domain::{Recipe, User};
use crate::errors::AppResult;

/// The canonical record sets for recipes and users.
#[derive(Clone)]
pub struct Storage {
    recipes: Arc<dyn RecordStore<Recipe>>,
    users: Arc<dyn RecordStore<User>>,
}

impl Storage {
    /// Open the backend selected by `config.storage_backend`.
    pub async fn open(config: &Config) -> AppResult<Self> {
        match config.storage_backend {
            StorageBackend::File => {
                tracing::info!(data_dir = %config.data_dir.display(), "Using JSON file storage");
                Ok(Self::files(&config.data_dir))
            }
            StorageBackend::Database => {
                let database = Database::connect(config).await?;
                Ok(Self::database(database.get_connection()))
            }
        }
    }

    /// JSON files `recipes.json` and `users.json` inside `dir`.
    pub fn files(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            recipes: Arc::new(JsonFileStore::<Recipe>::new(dir.join(RECIPES_FILE))),
            users: Arc::new(JsonFileStore::<User>::new(dir.join(USERS_FILE))),
        }
    }

    /// Tables `recipes` and `users` behind one SeaORM connection.
    pub fn database(connection: DatabaseConnection) -> Self {
        let store = Arc::new(SqlStore::new(connection));
        Self {
            recipes: store.clone(),
            users: store,
        }
    }

    pub fn recipes(&self) -> Arc<dyn RecordStore<Recipe>> {
        self.recipes.clone()
    }

    pub fn users(&self) -> Arc<dyn RecordStore<User>> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;
    use crate::domain::Password;

    #[tokio::test]
    async fn test_file_storage_uses_separate_files() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::files(dir.path());

        storage
            .users()
            .insert(User {
                id: "u001".to_string(),
                username: "anna".to_string(),
                email: "anna@example.com".to_string(),
                password: Password::new("pw"),
            })
            .await
            .unwrap();

        assert!(dir.child(USERS_FILE).exists());
        assert!(!dir.child(RECIPES_FILE).exists());
        assert!(storage.recipes().list().await.unwrap().is_empty());
    }
}
