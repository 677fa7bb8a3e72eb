//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach records only through `RecordStore`.

pub mod container;
mod recipe_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use recipe_service::{RecipeManager, RecipeService};
pub use user_service::{LoginOutcome, UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use recipe_service::MockRecipeService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
