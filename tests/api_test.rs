//! Integration tests for API endpoints.
//!
//! These tests drive the full router over JSON file storage in a
//! temporary directory, so every request hits real persistence.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use temp_dir::TempDir;
use tower::ServiceExt;

use recipe_api::api::{create_router, AppState};
use recipe_api::config::Config;
use recipe_api::domain::IdStrategy;
use recipe_api::infra::Storage;

// =============================================================================
// Test Helpers
// =============================================================================

fn app(dir: &TempDir, demo_mode: bool) -> Router {
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        id_strategy: IdStrategy::Sequential,
        insecure_demo_mode: demo_mode,
        ..Config::default()
    };
    let storage = Storage::files(&config.data_dir);
    create_router(AppState::from_storage(storage, &config))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn tart() -> Value {
    json!({
        "name": "Tart",
        "difficulty": "easy",
        "time": "30",
        "type": "dessert",
        "ingredients": ["flour", "sugar"],
        "preparation": "bake"
    })
}

fn recipe(name: &str, time: &str, kind: &str, ingredients: &[&str]) -> Value {
    json!({
        "name": name,
        "difficulty": "easy",
        "time": time,
        "type": kind,
        "ingredients": ingredients,
        "preparation": "cook"
    })
}

async fn register(app: &Router, username: &str, email: &str, password: &str) -> Response {
    send(
        app,
        post(
            "/users",
            json!({"username": username, "email": email, "password": password}),
        ),
    )
    .await
}

// =============================================================================
// Root Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_banner() {
    let dir = TempDir::new().unwrap();
    let response = send(&app(&dir, false), get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Recipe API is running");
}

#[tokio::test]
async fn test_health_reports_both_stores() {
    let dir = TempDir::new().unwrap();
    let response = send(&app(&dir, false), get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["recipes"]["status"], "healthy");
    assert_eq!(body["services"]["users"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let dir = TempDir::new().unwrap();
    let response = send(&app(&dir, false), get("/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/recipes"].is_object());
}

// =============================================================================
// Recipe Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_get_returns_same_recipe() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);

    let response = send(&app, post("/recipes", tart())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Recipe created successfully");
    assert_eq!(body["recipeId"], "r001");

    let response = send(&app, get("/recipes/r001")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = tart();
    expected["id"] = json!("r001");
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn test_created_recipe_is_persisted_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);

    send(&app, post("/recipes", tart())).await;

    let contents = std::fs::read_to_string(dir.child("recipes.json")).unwrap();
    assert!(contents.starts_with("[\n"));
    let stored: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(stored[0]["id"], "r001");
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored_by_file_backend() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);

    let mut payload = tart();
    payload["id"] = json!("mine");
    let body = body_json(send(&app, post("/recipes", payload)).await).await;

    assert_eq!(body["recipeId"], "r001");
    let response = send(&app, get("/recipes/mine")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    send(&app, post("/recipes", tart())).await;

    let response = send(&app, delete("/recipes/r001")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Recipe deleted successfully");
    assert_eq!(body["deletedRecipeId"], "r001");

    let response = send(&app, get("/recipes/r001")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, delete("/recipes/r001")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Recipe not found");
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    for payload in [
        recipe("Tart", "30", "dessert", &["flour", "sugar"]),
        recipe("Mousse", "45", "dessert", &["chocolate", "sugar"]),
        recipe("Soup", "30", "main", &["leek"]),
    ] {
        send(&app, post("/recipes", payload)).await;
    }

    let names = |body: Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect()
    };

    let all = body_json(send(&app, get("/recipes")).await).await;
    assert_eq!(names(all), vec!["Tart", "Mousse", "Soup"]);

    let both = body_json(send(&app, get("/recipes?type=dessert&time=30")).await).await;
    assert_eq!(names(both), vec!["Tart"]);

    let sugar = body_json(send(&app, get("/recipes?ingredient=sugar")).await).await;
    assert_eq!(names(sugar), vec!["Tart", "Mousse"]);

    let none = body_json(send(&app, get("/recipes?type=main&ingredient=sugar")).await).await;
    assert!(names(none).is_empty());

    let response = send(&app, get("/recipes?ingredient=sugar&ingredient=chocolate")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(body_json(response).await), vec!["Mousse"]);
}

#[tokio::test]
async fn test_create_recipe_missing_field_is_400() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);

    for field in ["name", "difficulty", "time", "type", "ingredients", "preparation"] {
        let mut payload = tart();
        payload.as_object_mut().unwrap().remove(field);

        let response = send(&app, post("/recipes", payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "without {}", field);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Missing required fields");
    }

    let recipes = body_json(send(&app, get("/recipes")).await).await;
    assert!(recipes.as_array().unwrap().is_empty());
}

// =============================================================================
// User Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_create_user_never_returns_password() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);

    let response = register(&app, "anna", "anna@example.com", "s3cret").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["userId"], "u001");
    assert_eq!(
        body["user"],
        json!({"id": "u001", "username": "anna", "email": "anna@example.com"})
    );
    assert!(!body.to_string().contains("s3cret"));
}

#[tokio::test]
async fn test_duplicate_username_or_email_is_400() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    register(&app, "anna", "anna@example.com", "pw").await;

    for (username, email) in [("anna", "new@example.com"), ("newbie", "anna@example.com")] {
        let response = register(&app, username, email, "pw").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Email or username already exists");
    }
}

#[tokio::test]
async fn test_create_user_missing_field_is_400() {
    let dir = TempDir::new().unwrap();
    let response = send(
        &app(&dir, false),
        post("/users", json!({"username": "anna", "email": "anna@example.com"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Missing required fields");
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    register(&app, "anna", "anna@example.com", "s3cret").await;

    let response = send(
        &app,
        post("/users/login", json!({"email": "anna@example.com", "password": "s3cret"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["userId"], "u001");
    assert_eq!(body["username"], "anna");
    assert!(body.get("easterEgg").is_none());
    assert!(!body.to_string().contains("s3cret"));
}

#[tokio::test]
async fn test_login_failures() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    register(&app, "anna", "anna@example.com", "s3cret").await;

    let response = send(
        &app,
        post("/users/login", json!({"email": "anna@example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Invalid email or password");

    let response = send(
        &app,
        post("/users/login", json!({"email": "nobody@example.com", "password": "s3cret"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, post("/users/login", json!({"password": "s3cret"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_demo_password_requires_demo_mode() {
    let dir = TempDir::new().unwrap();
    let secure = app(&dir, false);
    register(&secure, "anna", "anna@example.com", "s3cret").await;

    let credentials = json!({"email": "anna@example.com", "password": "chefmaster"});

    let response = send(&secure, post("/users/login", credentials.clone())).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let demo = app(&dir, true);
    let response = send(&demo, post("/users/login", credentials)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["easterEgg"], true);
    assert_eq!(body["userId"], "u001");
    assert_eq!(body["message"], "Welcome back, anna! You found the secret.");
}

#[tokio::test]
async fn test_login_alias() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, false);
    register(&app, "anna", "anna@example.com", "s3cret").await;

    let response = send(
        &app,
        post("/login", json!({"email": "anna@example.com", "password": "s3cret"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "anna");
}
