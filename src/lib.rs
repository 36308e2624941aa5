//! A small web service template.
//!
//! An axum HTTP application exposing a root info endpoint and a health
//! endpoint, plus a companion CLI that launches the server or prints
//! information. Configuration is a typed settings object resolved once per
//! process from environment variables (with defaults and an optional `.env`
//! file) and shared read-only by both consumers.
//!
//! # Modules
//!
//! - [`config`]: Typed settings from environment with a process-wide cache
//! - [`error`]: Unified error types
//! - [`api`]: HTTP API (root info, health, OpenAPI docs)
//! - [`cli`]: Command-line interface
//! - [`utils`]: Utility functions

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};

/// Static application name, baked in at compile time.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Static application version, baked in at compile time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
