//! Seed command - Replaces every record with the contents of JSON files.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{Recipe, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{repositories::ensure_unique_ids, Storage};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    tracing::info!(backend = %config.storage_backend, "Seeding storage...");

    let storage = Storage::open(&config).await?;
    let (recipes, users) = seed(&storage, &args.recipes, &args.users).await?;

    tracing::info!(recipes, users, "Storage seeded successfully");
    Ok(())
}

/// Load and check both seed files, then overwrite each store. Nothing is
/// written if either file fails to parse or repeats an id or account.
pub async fn seed(storage: &Storage, recipes: &Path, users: &Path) -> AppResult<(usize, usize)> {
    let recipes: Vec<Recipe> = read_json(recipes).await?;
    let users: Vec<User> = read_json(users).await?;
    ensure_unique_ids(&recipes)?;
    ensure_unique_ids(&users)?;
    ensure_distinct_accounts(&users)?;

    let recipes = storage.recipes().replace_all(recipes).await?;
    tracing::info!("Recipes inserted: {}", recipes);

    let users = storage.users().replace_all(users).await?;
    tracing::info!("Users inserted: {}", users);

    Ok((recipes, users))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), "Cannot read seed file: {}", e);
        AppError::Io(e)
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(path = %path.display(), "Invalid seed file: {}", e);
        AppError::Serialization(e)
    })
}

/// The file store does not enforce unique usernames and emails on bulk load.
fn ensure_distinct_accounts(users: &[User]) -> AppResult<()> {
    let mut usernames = HashSet::new();
    let mut emails = HashSet::new();

    for user in users {
        if !usernames.insert(user.username.as_str()) || !emails.insert(user.email.as_str()) {
            return Err(AppError::conflict("Email or username"));
        }
    }
    Ok(())
}
