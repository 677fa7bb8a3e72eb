//! User registration and login handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{fields::or_missing, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewUser, Password, UserResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Required with the database backend, ignored with the file backend
    #[serde(default)]
    #[schema(example = "u001")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "chef_anna")]
    pub username: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "anna@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing email or password"))]
    #[schema(example = "anna@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "or_missing")]
    #[validate(length(min = 1, message = "Missing email or password"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// User created
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
    #[schema(example = "u001")]
    pub user_id: String,
    pub user: UserResponse,
}

/// Login accepted
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    #[schema(example = "u001")]
    pub user_id: String,
    #[schema(example = "chef_anna")]
    pub username: String,
    /// Present only when the demo password was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easter_egg: Option<bool>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Missing required fields, or email or username already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserCreatedResponse>> {
    let new_user = NewUser {
        username: payload.username,
        email: payload.email,
        password: Password::new(payload.password),
    };
    let user = state.user_service.register(payload.id, new_user).await?;

    Ok(Created(UserCreatedResponse {
        message: "User created successfully".to_string(),
        user_id: user.id.clone(),
        user: UserResponse::from(&user),
    }))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let outcome = state
        .user_service
        .login(payload.email, Password::new(payload.password))
        .await?;
    let user = outcome.user;

    let response = if outcome.bypass {
        LoginResponse {
            message: format!("Welcome back, {}! You found the secret.", user.username),
            user_id: user.id,
            username: user.username,
            easter_egg: Some(true),
        }
    } else {
        LoginResponse {
            message: "Login successful".to_string(),
            user_id: user.id,
            username: user.username,
            easter_egg: None,
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use temp_dir::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::User;
    use crate::errors::AppError;
    use crate::infra::Storage;
    use crate::services::{LoginOutcome, MockRecipeService, MockUserService};

    fn app(users: MockUserService, dir: &TempDir) -> Router {
        let state = AppState::new(
            Arc::new(MockRecipeService::new()),
            Arc::new(users),
            Storage::files(dir.path()),
        );
        Router::new().nest("/users", user_routes()).with_state(state)
    }

    fn anna() -> User {
        User {
            id: "u001".to_string(),
            username: "anna".to_string(),
            email: "anna@example.com".to_string(),
            password: Password::new("s3cret"),
        }
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_hides_password() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service
            .expect_register()
            .withf(|id, user| id.is_none() && user.username == "anna" && user.password.matches("s3cret"))
            .times(1)
            .returning(|_, _| Ok(anna()));

        let response = app(service, &dir)
            .oneshot(post(
                "/users",
                json!({"username": "anna", "email": "anna@example.com", "password": "s3cret"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["userId"], "u001");
        assert_eq!(body["user"]["email"], "anna@example.com");
        assert!(!body.to_string().contains("s3cret"));
    }

    #[tokio::test]
    async fn test_create_user_conflict_is_400() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service
            .expect_register()
            .returning(|_, _| Err(AppError::conflict("Email or username")));

        let response = app(service, &dir)
            .oneshot(post(
                "/users",
                json!({"username": "anna", "email": "anna@example.com", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Email or username already exists");
    }

    #[tokio::test]
    async fn test_login_missing_password_is_400() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service.expect_login().never();

        let response = app(service, &dir)
            .oneshot(post("/users/login", json!({"email": "anna@example.com"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Missing email or password");
    }

    #[tokio::test]
    async fn test_null_fields_count_as_missing() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service.expect_register().never();
        service.expect_login().never();
        let app = app(service, &dir);

        let response = app
            .clone()
            .oneshot(post(
                "/users",
                json!({"username": "anna", "email": null, "password": "pw"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Missing required fields");

        let response = app
            .oneshot(post("/users/login", json!({"email": "anna@example.com", "password": null})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Missing email or password");
    }

    #[tokio::test]
    async fn test_login_bypass_sets_easter_egg() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service.expect_login().returning(|_, _| {
            Ok(LoginOutcome {
                user: anna(),
                bypass: true,
            })
        });

        let response = app(service, &dir)
            .oneshot(post(
                "/users/login",
                json!({"email": "anna@example.com", "password": "chefmaster"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["easterEgg"], true);
        assert_eq!(body["message"], "Welcome back, anna! You found the secret.");
    }

    #[tokio::test]
    async fn test_login_rejected_is_401() {
        let dir = TempDir::new().unwrap();
        let mut service = MockUserService::new();
        service
            .expect_login()
            .returning(|_, _| Err(AppError::InvalidCredentials));

        let response = app(service, &dir)
            .oneshot(post(
                "/users/login",
                json!({"email": "anna@example.com", "password": "wrong"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert!(body.get("easterEgg").is_none());
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}
