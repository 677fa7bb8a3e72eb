//! Recipe handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{fields::or_missing, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewRecipe, Recipe, RecipeFilter};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// Recipe creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeRequest {
    /// Required with the database backend, ignored with the file backend
    #[serde(default)]
    #[schema(example = "r001")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "Lemon Tart")]
    pub name: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "easy")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "30")]
    pub time: String,
    #[serde(default, rename = "type", deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "dessert")]
    pub kind: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub preparation: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateRecipeRequest {
    fn into_parts(self) -> (Option<String>, NewRecipe) {
        let recipe = NewRecipe {
            name: self.name,
            difficulty: self.difficulty,
            time: self.time,
            kind: self.kind,
            ingredients: self.ingredients,
            preparation: self.preparation,
            image: self.image,
        };
        (self.id, recipe)
    }
}

/// Recipe created
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreatedResponse {
    #[schema(example = "Recipe created successfully")]
    pub message: String,
    #[schema(example = "r001")]
    pub recipe_id: String,
}

/// Recipe deleted
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDeletedResponse {
    #[schema(example = "Recipe deleted successfully")]
    pub message: String,
    #[schema(example = "r001")]
    pub deleted_recipe_id: String,
}

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/:id", get(get_recipe).delete(delete_recipe))
}

/// List recipes, optionally filtered
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "Recipes",
    params(RecipeFilter),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<Recipe>),
        (status = 400, description = "Malformed query string"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Recipe>>> {
    let Query(pairs) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let filter = RecipeFilter::from_pairs(pairs);
    let recipes = state.recipe_service.list_recipes(filter).await?;
    Ok(Json(recipes))
}

/// Get recipe by id
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recipe>> {
    let recipe = state.recipe_service.get_recipe(id).await?;
    Ok(Json(recipe))
}

/// Create a recipe
#[utoipa::path(
    post,
    path = "/recipes",
    tag = "Recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeCreatedResponse),
        (status = 400, description = "Missing required fields or duplicate id")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRecipeRequest>,
) -> AppResult<Created<RecipeCreatedResponse>> {
    let (id, recipe) = payload.into_parts();
    let created = state.recipe_service.create_recipe(id, recipe).await?;

    Ok(Created(RecipeCreatedResponse {
        message: "Recipe created successfully".to_string(),
        recipe_id: created.id,
    }))
}

/// Delete recipe by id
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe deleted", body = RecipeDeletedResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RecipeDeletedResponse>> {
    let deleted = state.recipe_service.delete_recipe(id).await?;

    Ok(Json(RecipeDeletedResponse {
        message: "Recipe deleted successfully".to_string(),
        deleted_recipe_id: deleted.id,
    }))
}
