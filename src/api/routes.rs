//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, root, HealthResponse, RootResponse};

/// OpenAPI document covering the declared routes.
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::handlers::root, crate::api::handlers::health),
    components(schemas(RootResponse, HealthResponse))
)]
pub struct ApiDoc;

/// Create the API router.
///
/// Anything outside the declared routes falls through to axum's default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
