//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use axum_helpers::{
    AppError,
    errors::responses::{
        BadRequestIdentifierResponse, BadRequestJsonResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Product, ProductId, ProductInput, ProductResponse};
use crate::repository::ProductRepository;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product, delete_product),
    components(
        schemas(ProductInput, ProductResponse),
        responses(
            BadRequestIdentifierResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Products routes, relative to wherever the caller nests them.
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    let shared_repository = Arc::new(repository);

    Router::new()
        .route("/", get(list_products::<R>).post(create_product::<R>))
        .route(
            "/{id}",
            put(update_product::<R>).delete(delete_product::<R>),
        )
        .with_state(shared_repository)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All stored products", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = repository.find_all().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Create a product
///
/// Any `id` in the body is ignored; the store assigns a new one.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    let product = repository.create(Product::from(input)).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))).into_response())
}

/// Replace a product
///
/// Every field is overwritten. The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product replaced", body = ProductResponse),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, description = "No product with this id"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    let target = Product {
        id: ProductId::Assigned(id),
        ..Product::from(input)
    };

    Ok(match repository.update(target).await? {
        Some(product) => Json(ProductResponse::from(product)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, description = "No product with this id"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if repository.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
