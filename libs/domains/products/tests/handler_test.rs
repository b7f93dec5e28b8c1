//! Handler tests for the products domain
//!
//! The router runs against the in-memory repository, so these cover routing,
//! status codes and JSON shapes without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_len(body: Body) -> usize {
    body.collect().await.unwrap().to_bytes().len()
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

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn beverages() -> Category {
    Category {
        category_id: 1,
        category: "Beverages".to_string(),
        active: true,
    }
}

fn product(id: i32, name: &str, stock: i32, active: bool) -> Product {
    Product {
        product_id: Some(id),
        name: name.to_string(),
        category_id: 1,
        price: Decimal::new(150, 2),
        stock,
        active,
        category: None,
    }
}

/// Router over a repository seeded with `products`.
///
/// Fixture ids must be 1, 2, 3... in order: the repository assigns them.
async fn app_with(products: Vec<Product>) -> Router {
    let repo = InMemoryProductRepository::with_categories([beverages()]);
    for p in products {
        let expected = p.product_id;
        let saved = repo
            .save(Product {
                product_id: None,
                ..p
            })
            .await
            .unwrap();
        assert_eq!(saved.product_id, expected);
    }
    handlers::router(ProductService::new(repo))
}

#[tokio::test]
async fn test_get_all_returns_every_product() {
    let app = app_with(vec![product(1, "Soda", 2, true), product(2, "Agua", 9, true)]).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_get_all_on_empty_catalogue_is_200() {
    let app = app_with(vec![]).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_product_lifecycle_scenario() {
    let repo = InMemoryProductRepository::with_categories([beverages()]);
    for _ in 0..6 {
        let filler = repo.save(product(0, "filler", 100, true)).await.unwrap();
        repo.delete(filler.product_id.unwrap()).await.unwrap();
    }
    let soda = repo
        .save(Product {
            product_id: None,
            ..product(0, "Soda", 2, true)
        })
        .await
        .unwrap();
    assert_eq!(soda.product_id, Some(7));
    let app = handlers::router(ProductService::new(repo));

    let response = app.clone().oneshot(get("/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "productId": 7,
            "name": "Soda",
            "categoryId": 1,
            "price": 1.5,
            "stock": 2,
            "active": true,
            "category": {"categoryId": 1, "category": "Beverages", "active": true}
        })
    );

    let response = app.clone().oneshot(get("/category/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, Some(7));

    let response = app.clone().oneshot(get("/category/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(delete("/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_len(response.into_body()).await, 0);

    let response = app.clone().oneshot(get("/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_len(response.into_body()).await, 0);

    let response = app.oneshot(delete("/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_by_category_sorted_by_name() {
    let app = app_with(vec![
        product(1, "Té", 5, true),
        product(2, "Agua", 5, true),
        product(3, "Jugo", 5, true),
    ])
    .await;

    let response = app.oneshot(get("/category/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Agua", "Jugo", "Té"]);
}

#[tokio::test]
async fn test_scarce_products_only_active_below_threshold() {
    let app = app_with(vec![
        product(1, "A", 3, true),
        product(2, "B", 10, true),
        product(3, "C", 4, false),
    ])
    .await;

    let response = app.clone().oneshot(get("/scarce/5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].stock, 3);

    let response = app.oneshot(get("/scarce/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_without_id_assigns_one() {
    let app = app_with(vec![]).await;

    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "name": "Galletas",
                "categoryId": 1,
                "price": 2.25,
                "stock": 30,
                "active": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let saved: Product = json_body(response.into_body()).await;
    assert!(saved.product_id.is_some());
    assert_eq!(saved.name, "Galletas");
    assert_eq!(saved.price, Decimal::new(225, 2));
    assert_eq!(saved.category, Some(beverages()));
}

#[tokio::test]
async fn test_save_rejects_malformed_body() {
    let app = app_with(vec![]).await;

    let response = app
        .oneshot(post_json("/", json!({"name": "Sin precio"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = app_with(vec![]).await;

    for uri in ["/abc", "/category/xyz"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_ID");
    }
}

#[tokio::test]
async fn test_non_integer_threshold_is_invalid_parameter() {
    let app = app_with(vec![]).await;

    let response = app.oneshot(get("/scarce/many")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_PARAMETER");
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = app_with(vec![product(1, "Soda", 2, true)]).await;

    let request = Request::builder()
        .method("PUT")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
}
