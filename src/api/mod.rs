//! HTTP API module for the root info, health, and OpenAPI docs endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
