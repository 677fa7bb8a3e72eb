//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{recipe_handler, user_handler};
use crate::domain::{Recipe, UserResponse};

/// OpenAPI documentation for the Recipe API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        version = "0.1.0",
        description = "Recipe and user records over JSON files or a SQL database",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Recipe endpoints
        recipe_handler::list_recipes,
        recipe_handler::get_recipe,
        recipe_handler::create_recipe,
        recipe_handler::delete_recipe,
        // User endpoints
        user_handler::create_user,
        user_handler::login,
    ),
    components(
        schemas(
            // Domain types
            Recipe,
            UserResponse,
            // Recipe handler types
            recipe_handler::CreateRecipeRequest,
            recipe_handler::RecipeCreatedResponse,
            recipe_handler::RecipeDeletedResponse,
            // User handler types
            user_handler::CreateUserRequest,
            user_handler::LoginRequest,
            user_handler::UserCreatedResponse,
            user_handler::LoginResponse,
        )
    ),
    tags(
        (name = "Recipes", description = "Recipe listing, lookup, creation and deletion"),
        (name = "Users", description = "User registration and login")
    )
)]
pub struct ApiDoc;
