//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::{get, post}, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{recipe_routes, user_handler, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::ROOT_BANNER;
use crate::errors::AppResult;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Banner and health check
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/recipes", recipe_routes())
        .nest("/users", user_routes())
        // Shorthand for /users/login
        .route("/login", post(user_handler::login))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    ROOT_BANNER
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: StoreHealth,
}

/// Health of each record store
#[derive(Serialize)]
struct StoreHealth {
    recipes: ServiceStatus,
    users: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_ping(result: AppResult<()>) -> Self {
        match result {
            Ok(()) => ServiceStatus {
                status: "healthy",
                error: None,
            },
            Err(e) => {
                tracing::warn!("Health check failed: {:?}", e);
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Health check endpoint pinging both record stores
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let recipes = state.storage.recipes();
    let users = state.storage.users();
    let (recipes, users) = futures::join!(recipes.ping(), users.ping());

    let recipes = ServiceStatus::from_ping(recipes);
    let users = ServiceStatus::from_ping(users);
    let all_healthy = recipes.is_healthy() && users.is_healthy();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: StoreHealth { recipes, users },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
