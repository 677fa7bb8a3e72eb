//! User service - registration and login.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{BYPASS_PASSWORD, MISSING_FIELDS_MESSAGE};
use crate::domain::{IdAssignment, IdGenerator, NewUser, Password, Record, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{repositories::duplicate_id, RecordStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: User,
    /// Granted by the demo password rather than the stored one
    pub bypass: bool,
}

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user. Username and email must both be unused.
    async fn register(&self, id: Option<String>, user: NewUser) -> AppResult<User>;

    /// Check credentials for the account registered under `email`
    async fn login(&self, email: String, password: Password) -> AppResult<LoginOutcome>;
}

/// Concrete implementation of UserService over a record store.
pub struct UserManager {
    store: Arc<dyn RecordStore<User>>,
    ids: Arc<dyn IdGenerator>,
    assignment: IdAssignment,
    demo_mode: bool,
}

impl UserManager {
    pub fn new(
        store: Arc<dyn RecordStore<User>>,
        ids: Arc<dyn IdGenerator>,
        assignment: IdAssignment,
    ) -> Self {
        Self {
            store,
            ids,
            assignment,
            demo_mode: false,
        }
    }

    /// Accept the fixed demo password for any existing account.
    pub fn with_demo_mode(mut self, enabled: bool) -> Self {
        self.demo_mode = enabled;
        self
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, id: Option<String>, user: NewUser) -> AppResult<User> {
        let id = match self.assignment {
            IdAssignment::Client => Some(
                id.filter(|id| !id.trim().is_empty())
                    .ok_or_else(|| AppError::validation(MISSING_FIELDS_MESSAGE))?,
            ),
            IdAssignment::Server => None,
        };
        let ids = self.ids.clone();

        let created = self
            .store
            .insert_with(Box::new(move |existing: &[User]| {
                if existing
                    .iter()
                    .any(|u| u.collides_with(&user.username, &user.email))
                {
                    return Err(AppError::conflict("Email or username"));
                }

                let id = match id {
                    Some(id) if existing.iter().any(|u| u.id == id) => {
                        return Err(duplicate_id::<User>())
                    }
                    Some(id) => id,
                    None => {
                        let taken: Vec<&str> = existing.iter().map(Record::id).collect();
                        ids.next_id(User::ID_PREFIX, &taken)
                    }
                };
                Ok(user.with_id(id))
            }))
            .await?;

        tracing::info!(user_id = %created.id, username = %created.username, "User registered");
        Ok(created)
    }

    async fn login(&self, email: String, password: Password) -> AppResult<LoginOutcome> {
        let same_email = |user: &User| user.email == email;
        let Some(user) = self.store.find_where(&same_email).await?.into_iter().next() else {
            tracing::debug!("Login attempt for unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if self.demo_mode && password.matches(BYPASS_PASSWORD) {
            tracing::warn!(user_id = %user.id, "Login granted by demo password");
            return Ok(LoginOutcome { user, bypass: true });
        }

        if !user.password.matches(password.as_str()) {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome {
            user,
            bypass: false,
        })
    }
}
