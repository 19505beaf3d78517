//! QuoteForge Server - HTTP REST API for contract management
//!
//! This crate exposes the contract domain over a REST API:
//!
//! - **Contracts**: CRUD, duplication, and dry-run validation over the
//!   in-memory contract store
//! - **Templates**: reusable contract starting points with category
//!   filtering, instantiation, and duplication
//! - **Validation**: standalone schema checks (single and bulk), the
//!   raw schema document, and the rules catalog
//! - **Health & Metrics**: liveness/readiness probes and a Prometheus
//!   metrics endpoint
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET|POST /api/contracts`, `GET|PUT|DELETE /api/contracts/{id}`
//! - `POST /api/contracts/{id}/duplicate`, `POST /api/contracts/validate`
//! - `GET|POST /api/templates`, `GET /api/templates/categories`
//! - `GET|PUT|DELETE /api/templates/{id}`
//! - `POST /api/templates/{id}/use`, `POST /api/templates/{id}/duplicate`
//! - `POST /api/validation/contract`, `GET /api/validation/schema`
//! - `POST /api/validation/bulk`, `GET /api/validation/rules`
//!
//! There is no authentication; every endpoint is open. The only
//! auth-shaped state in the whole system is a placeholder flag on the
//! client side.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
