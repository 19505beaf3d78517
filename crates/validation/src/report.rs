use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Instance path of the offending node (for example
    /// `/contractMetadata/clientName`), or the schema path when the
    /// violation has no instance location.
    pub field: String,
    /// Human-readable description of the mismatch.
    pub message: String,
    /// The offending value as submitted.
    pub value: Value,
}

/// Outcome of validating a candidate document.
///
/// Carries every violation found in a single pass. An empty error list
/// means the document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Report for a document with no violations.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Report built from collected violations.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
