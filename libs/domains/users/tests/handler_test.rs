//! Handler tests for the users domain: registration and token issuance.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "handler-test-secret-that-is-long-enough";

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn jwt() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(SECRET).unwrap().with_expires_in(600))
}

fn app(repo: InMemoryUserRepository) -> Router {
    handlers::router(UserService::new(repo), jwt())
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn register(router: &Router, email: &str, password: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(post(
            "/",
            json!({ "name": "Ada", "email": email, "password": password }).to_string(),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_201_without_hash() {
    let router = app(InMemoryUserRepository::new());

    let response = register(&router, "ada@example.com", "secret").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["name"], "Ada");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_returns_409() {
    let router = app(InMemoryUserRepository::new());

    register(&router, "ada@example.com", "secret").await;
    let response = register(&router, "ada@example.com", "other").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_invalid_fields_returns_400() {
    let router = app(InMemoryUserRepository::new());

    let response = register(&router, "not-an-email", "secret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = register(&router, "ada@example.com", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_body_returns_422() {
    let response = app(InMemoryUserRepository::new())
        .oneshot(post("/", json!({ "name": "Ada" }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_token_for_valid_credentials() {
    let router = app(InMemoryUserRepository::new());
    let registered: UserResponse =
        json_body(register(&router, "ada@example.com", "secret").await.into_body()).await;

    let response = router
        .oneshot(post(
            "/token",
            json!({ "email": "ada@example.com", "password": "secret" }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let token: TokenResponse = json_body(response.into_body()).await;
    let claims = jwt().verify(&token.access_token).unwrap();
    assert_eq!(claims.sub, registered.id.to_string());
    assert_eq!(claims.exp, claims.iat + 600);
}

#[tokio::test]
async fn test_token_rejects_wrong_password_and_unknown_email() {
    let router = app(InMemoryUserRepository::new());
    register(&router, "ada@example.com", "secret").await;

    for (email, password) in [("ada@example.com", "guess"), ("bob@example.com", "secret")] {
        let response = router
            .clone()
            .oneshot(post(
                "/token",
                json!({ "email": email, "password": password }).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_token_malformed_body_returns_400() {
    let response = app(InMemoryUserRepository::new())
        .oneshot(post("/token", "{".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
