use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use wardrobe_catalog::{Product, ProductUpdate};
use wardrobe_core::{BrandId, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
        .route("/lowest-price", get(lowest_price_per_category))
        .route("/lowest-brand", get(lowest_full_coverage_brand))
        .route("/category", get(category_price_range))
}

fn product_response(services: &AppServices, product: &Product) -> axum::response::Response {
    match services.catalog().brand_of(product) {
        Some(brand) => (
            StatusCode::OK,
            Json(dto::data(dto::product_to_json(product, &brand))),
        )
            .into_response(),
        // The product's brand vanished between the mutation and the read.
        None => errors::internal_error("an unexpected error occurred"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let Some(category) = body.category else {
        return errors::invalid_field("category is required");
    };
    let Some(brand_id) = body.brand_id else {
        return errors::invalid_field("brand_id is required");
    };
    let Some(price) = body.price else {
        return errors::invalid_field("price is required");
    };
    if price < 0 {
        return errors::invalid_field("price must be greater than or equal to 0");
    }

    match services
        .catalog()
        .add_product(&category, BrandId::new(brand_id), price as u64)
    {
        Ok(product) => product_response(&services, &product),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    if body.price.is_some_and(|p| p < 0) {
        return errors::invalid_field("price must be greater than or equal to 0");
    }

    let update = ProductUpdate {
        category: body.category,
        brand_id: body.brand_id.map(BrandId::new),
        price: body.price.map(|p| p as u64),
    };

    match services.catalog().update_product(id, update) {
        Ok(product) => product_response(&services, &product),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog().delete_product(id) {
        Ok(product) => product_response(&services, &product),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn lowest_price_per_category(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.lowest_price_per_category() {
        Ok(result) => (StatusCode::OK, Json(dto::lowest_price_to_json(&result))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn lowest_full_coverage_brand(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.cheapest_full_coverage_brand() {
        Ok(result) => (
            StatusCode::OK,
            Json(dto::data(dto::full_coverage_brand_to_json(&result))),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn category_price_range(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let Some(title) = params.get("title") else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            errors::CODE_MISSING_PARAMETER,
            "title parameter is required",
        );
    };

    match services.price_range_by_category(title) {
        Ok(result) => (StatusCode::OK, Json(dto::price_range_to_json(&result))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
