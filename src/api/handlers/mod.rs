//! HTTP request handlers.

pub mod recipe_handler;
pub mod user_handler;

pub use recipe_handler::recipe_routes;
pub use user_handler::user_routes;
