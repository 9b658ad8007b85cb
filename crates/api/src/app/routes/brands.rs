use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use wardrobe_core::BrandId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_brand))
        .route("/:id", put(update_brand).delete(delete_brand))
}

pub async fn create_brand(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::BrandRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let Some(name) = body.name else {
        return errors::invalid_field("brand name is required");
    };

    match services.catalog().add_brand(&name) {
        Ok(brand) => (StatusCode::OK, Json(dto::data(dto::brand_to_json(&brand)))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::BrandRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: BrandId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let Some(name) = body.name else {
        return errors::invalid_field("brand name is required");
    };

    match services.catalog().update_brand(id, &name) {
        Ok(brand) => (StatusCode::OK, Json(dto::data(dto::brand_to_json(&brand)))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BrandId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog().delete_brand(id) {
        Ok(brand) => (StatusCode::OK, Json(dto::data(dto::brand_to_json(&brand)))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
