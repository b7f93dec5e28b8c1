use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, PathI32,
    errors::handlers::method_not_allowed,
    errors::responses::{
        BadRequestBodyResponse, BadRequestIdResponse, BadRequestParamResponse,
        InternalServerErrorResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Category, Product};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "products";

/// OpenAPI documentation for the products endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all,
        get_by_id,
        get_by_category,
        get_scarce_products,
        save,
        delete,
    ),
    components(
        schemas(Product, Category),
        responses(
            BadRequestIdResponse,
            BadRequestParamResponse,
            BadRequestBodyResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Supermarket product catalogue")
    )
)]
pub struct ApiDoc;

/// Routes relative to the products prefix
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_all::<R>).post(save::<R>))
        .route("/{productId}", get(get_by_id::<R>).delete(delete::<R>))
        .route("/category/{categoryId}", get(get_by_category::<R>))
        .route("/scarce/{quantity}", get(get_scarce_products::<R>))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

/// 200 with the list, 404 with an empty body when absent or empty
fn list_or_not_found(products: Option<Vec<Product>>) -> Response {
    match products {
        Some(products) if !products.is_empty() => (StatusCode::OK, Json(products)).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Get all supermarket products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Every product", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn get_all<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_all().await?;
    Ok(Json(products))
}

/// Search a product with an ID
#[utoipa::path(
    get,
    path = "/{productId}",
    tag = TAG,
    params(
        ("productId" = i32, Path, description = "The id of the product", example = 7)
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn get_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(product_id): IdPath,
) -> ProductResult<Response> {
    let response = match service.get_by_id(product_id).await? {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// Search products for the category ID
#[utoipa::path(
    get,
    path = "/category/{categoryId}",
    tag = TAG,
    params(
        ("categoryId" = i32, Path, description = "The id of the category", example = 1)
    ),
    responses(
        (status = 200, description = "Products of the category sorted by name", body = Vec<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Category not found or without products"),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn get_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(category_id): IdPath,
) -> ProductResult<Response> {
    let products = service.get_by_category(category_id).await?;
    Ok(list_or_not_found(products))
}

/// Active products whose stock is below a quantity
#[utoipa::path(
    get,
    path = "/scarce/{quantity}",
    tag = TAG,
    params(
        ("quantity" = i32, Path, description = "Stock threshold, exclusive", example = 10)
    ),
    responses(
        (status = 200, description = "Scarce products", body = Vec<Product>),
        (status = 400, response = BadRequestParamResponse),
        (status = 404, description = "No scarce products"),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn get_scarce_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathI32(quantity): PathI32,
) -> ProductResult<Response> {
    let products = service.get_scarce_products(quantity).await?;
    Ok(list_or_not_found(products))
}

/// Save a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn save<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(product) = payload?;
    let saved = service.save(product).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Delete a product with an ID
#[utoipa::path(
    delete,
    path = "/{productId}",
    tag = TAG,
    params(
        ("productId" = i32, Path, description = "The id of the product", example = 7)
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("jwt" = []))
)]
async fn delete<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(product_id): IdPath,
) -> ProductResult<StatusCode> {
    if service.delete(product_id).await? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
