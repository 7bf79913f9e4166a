//! Product handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Product, ProductInput};
use crate::errors::{AppError, AppResult, OptionExt};

/// Product create/update request (full field set)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    /// Product name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Widget")]
    pub name: String,
    /// Product description
    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "A standard widget")]
    pub description: String,
    /// Unit price, must be non-negative
    #[validate(custom(function = "validate_non_negative_price"))]
    #[schema(value_type = String, example = "99.99")]
    pub price: Decimal,
    /// Stock quantity, must be non-negative
    #[validate(range(min = 0, message = "Quantity must be non-negative"))]
    #[schema(example = 10)]
    pub quantity: i32,
}

fn validate_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("price_negative");
        err.message = Some("Price must be non-negative".into());
        return Err(err);
    }
    Ok(())
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        ProductInput {
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// Name search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring to match against product names (case-insensitive)
    pub name: String,
}

/// Quantity filter query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuantityParams {
    /// Only products with quantity strictly greater than this are returned
    pub min: i32,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/quantity", get(products_with_minimum_quantity))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get(id).await?.ok_or_not_found()?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace all mutable fields of a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state
        .product_service
        .update(id, payload.into())
        .await?
        .ok_or_not_found()?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.product_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

/// Search products by name substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.search_by_name(&params.name).await?;
    Ok(Json(products))
}

/// List products above a quantity threshold
#[utoipa::path(
    get,
    path = "/api/products/quantity",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(QuantityParams),
    responses(
        (status = 200, description = "Products with quantity above the threshold", body = Vec<Product>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn products_with_minimum_quantity(
    State(state): State<AppState>,
    Query(params): Query<QuantityParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .product_service
        .with_minimum_quantity(params.min)
        .await?;
    Ok(Json(products))
}
