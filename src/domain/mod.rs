//! Domain layer - Records and the rules that apply to them
//!
//! Recipes and users, the query filter for recipes, and the id
//! generation strategies. Nothing here knows how records are stored.

pub mod id;
pub mod password;
pub mod recipe;
pub mod record;
pub mod user;

pub use id::{IdAssignment, IdGenerator, IdStrategy, RandomIds, SequentialIds, TimestampIds};
pub use password::Password;
pub use recipe::{NewRecipe, Recipe, RecipeFilter};
pub use record::Record;
pub use user::{NewUser, User, UserResponse};
