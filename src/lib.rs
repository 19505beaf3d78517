//! Workspace umbrella crate for QuoteForge contract management.
//!
//! This crate stitches together the document model, the schema
//! validator, and the pricing calculator so callers can go from a raw
//! JSON payload to a validated, priced contract with a single API
//! entry point. The HTTP service and the client editor both build on
//! exactly these pieces; there is one calculator and one validator in
//! the whole system.

pub use model::{
    ensure_line_item_ids, regenerate_line_item_ids, ContractDocument, ContractMetadata,
    ContractRecord, ContractStatus, CostType, Discount, DiscountType, LineItem, TemplateRecord,
    DEFAULT_SCHEMA_VERSION,
};
pub use pricing::{price, ContractTotals};
pub use validation::{
    contract_schema, rules_catalog, validate_contract, FieldError, ValidationReport, SCHEMA_ID,
};

use serde_json::Value;

/// Outcome of running a raw payload through validation and pricing.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractEvaluation {
    /// The payload failed the schema; the report carries every
    /// violation found in one pass.
    Invalid(ValidationReport),
    /// The payload is a valid contract document, returned in typed
    /// form alongside its derived totals.
    Valid {
        document: ContractDocument,
        totals: ContractTotals,
    },
}

impl ContractEvaluation {
    pub fn is_valid(&self) -> bool {
        matches!(self, ContractEvaluation::Valid { .. })
    }
}

/// Validates a raw JSON payload and, when it passes, prices it.
///
/// Validation failure is a normal outcome, not an error; the only
/// error case is a payload that satisfies the schema but cannot be
/// represented in the typed model, which the schema is designed to
/// make unreachable.
///
/// # Errors
///
/// Propagates the deserialization error if the valid payload cannot be
/// converted into a [`ContractDocument`].
pub fn evaluate(candidate: &Value) -> Result<ContractEvaluation, serde_json::Error> {
    let report = validate_contract(candidate);
    if !report.is_valid {
        return Ok(ContractEvaluation::Invalid(report));
    }
    let document: ContractDocument = serde_json::from_value(candidate.clone())?;
    let totals = price(&document);
    Ok(ContractEvaluation::Valid { document, totals })
}
