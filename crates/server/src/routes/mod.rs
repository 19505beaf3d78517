//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the
//! QuoteForge server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `contracts`: Contract CRUD, duplication, and dry-run validation
//! - `templates`: Template catalog, instantiation, and duplication
//! - `validation`: Standalone schema checks, the schema itself, rules

pub mod contracts;
pub mod health;
pub mod templates;
pub mod validation;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available
/// endpoints. This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "QuoteForge Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/contracts",
            "/api/contracts/validate",
            "/api/templates",
            "/api/templates/categories",
            "/api/validation/contract",
            "/api/validation/schema",
            "/api/validation/bulk",
            "/api/validation/rules",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Route")
}
