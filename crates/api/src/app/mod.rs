//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store/service wiring and the read-side query facade
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Unsupported methods on known paths surface the same generic not-found as
/// unknown paths.
async fn method_not_allowed_as_not_found(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            errors::CODE_NOT_FOUND,
            "no such endpoint",
        );
    }
    response
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/v1/brands", routes::brands::router())
        .nest("/api/v1/products", routes::products::router())
        .fallback(routes::system::unmatched_route)
        .layer(
            ServiceBuilder::new()
                .layer(Extension(services))
                .layer(axum::middleware::map_response(
                    method_not_allowed_as_not_found,
                )),
        )
}
