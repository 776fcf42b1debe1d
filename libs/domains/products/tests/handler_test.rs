//! Handler tests for the products domain
//!
//! These drive `handlers::router` directly with an in-memory repository:
//! status codes, error bodies and JSON shapes. Authentication is layered on
//! by the application and is covered by its end-to-end tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seed(repo: &InMemoryProductRepository, name: &str, price: f64) -> Product {
    let product = Product::new(name, price).unwrap();
    repo.create(&product).await.unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request(
            "POST",
            "/",
            &json!({ "name": "Standing desk", "price": 249.99 }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Standing desk");
    assert_eq!(product.price, 249.99);
}

#[tokio::test]
async fn test_create_product_invalid_field_returns_400() {
    let repo = InMemoryProductRepository::new();
    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/",
            &json!({ "name": "", "price": 10.0 }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let page = repo.find_all(ListProducts::default()).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_create_product_malformed_body_returns_422() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request("POST", "/", "{\"name\": \"Desk\", "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "Lamp", 30.0).await;

    let response = app(repo)
        .oneshot(empty_request("GET", &format!("/{}", product.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, product);
}

#[tokio::test]
async fn test_get_product_invalid_uuid_returns_400() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(empty_request("GET", "/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_UUID");
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(empty_request("GET", &format!("/{}", uuid::Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_products_paginates() {
    let repo = InMemoryProductRepository::new();
    for i in 1..=10 {
        seed(&repo, &format!("Product {i}"), i as f64).await;
    }

    let response = app(repo)
        .oneshot(empty_request("GET", "/?page=2&limit=4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!((page.page, page.limit), (2, 4));
    let names: Vec<_> = page.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Product 5", "Product 6", "Product 7", "Product 8"]);
}

#[tokio::test]
async fn test_list_products_tolerates_bad_query() {
    let repo = InMemoryProductRepository::new();
    for i in 1..=3 {
        seed(&repo, &format!("Product {i}"), i as f64).await;
    }

    let response = app(repo)
        .oneshot(empty_request("GET", "/?page=-1&limit=abc&sort=DESC"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!((page.page, page.limit), (0, 0));
    let names: Vec<_> = page.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Product 3", "Product 2", "Product 1"]);
}

#[tokio::test]
async fn test_update_product_merges_fields() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "Chair", 80.0).await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/{}", product.id),
            &json!({ "price": 65.0 }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.name, "Chair");
    assert_eq!(updated.price, 65.0);
    assert_eq!(updated.created_at, product.created_at);

    assert_eq!(repo.find_by_id(product.id).await.unwrap().price, 65.0);
}

#[tokio::test]
async fn test_update_missing_product_returns_404_before_body() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request(
            "PUT",
            &format!("/{}", uuid::Uuid::now_v7()),
            "not json",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_body_returns_400() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "Chair", 80.0).await;

    let response = app(repo)
        .oneshot(json_request("PUT", &format!("/{}", product.id), "not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_invalid_merge_keeps_stored_product() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "Chair", 80.0).await;

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/{}", product.id),
            &json!({ "price": -1.0 }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.find_by_id(product.id).await.unwrap(), product);
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let repo = InMemoryProductRepository::new();
    let product = seed(&repo, "Shelf", 45.0).await;
    let router = app(repo);

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(empty_request("GET", &format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
