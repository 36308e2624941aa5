//! HTTP API handlers.
//!
//! Both handlers are pure reads over compile-time identity: no shared state,
//! safe to call concurrently and repeatedly (liveness/readiness probing).

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{APP_NAME, APP_VERSION};

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Application name.
    pub name: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Always "running".
    pub status: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// Application version.
    pub version: &'static str,
}

/// Root endpoint returning application identity.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Application identity", body = RootResponse))
)]
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: APP_NAME,
        version: APP_VERSION,
        status: "running",
    })
}

/// Health check endpoint for container orchestration.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: APP_VERSION,
    })
}
