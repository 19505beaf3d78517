//! QuoteForge schema validation layer.
//!
//! Wraps the static contract JSON Schema (Draft 2020-12) behind one
//! function, [`validate_contract`], shared by the HTTP service and the
//! client editor. Constraints live only in the schema file; nothing
//! here hand-codes a parallel rule set that could drift.
//!
//! ## Behavior worth knowing
//!
//! - All violations are collected in one pass, never fail-fast.
//! - Validation failure is a normal outcome (a [`ValidationReport`]),
//!   not an error: malformed input of any shape simply produces errors
//!   describing the mismatch.
//! - The same call serves as a persistence gate and as a standalone
//!   dry-run check; callers decide what to do with the report.

mod report;
mod rules;
mod schema;

pub use crate::report::{FieldError, ValidationReport};
pub use crate::rules::rules_catalog;
pub use crate::schema::{contract_schema, validate_contract, SCHEMA_ID};
