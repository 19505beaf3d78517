use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::ContractDocument;
use crate::ids::{ensure_line_item_ids, regenerate_line_item_ids};

/// Name suffix applied when a contract or template is duplicated.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Lifecycle state of a persisted contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

/// A contract as held by the server-side store.
///
/// The document fields are flattened so the persisted JSON shape is the
/// client document plus `id`, `status`, and timestamps at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: Uuid,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub document: ContractDocument,
}

impl ContractRecord {
    /// Wraps a submitted document into a new draft record.
    ///
    /// Assigns the record id and timestamps and ensures every line item
    /// has a unique id before the record is ever visible to callers.
    pub fn create(mut document: ContractDocument) -> Self {
        ensure_line_item_ids(&mut document.line_items);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: ContractStatus::Draft,
            created_at: now,
            updated_at: now,
            document,
        }
    }

    /// Replaces the document wholesale, keeping id, status, and
    /// creation time and stamping a fresh `updatedAt`.
    pub fn replace_document(&mut self, mut document: ContractDocument) {
        ensure_line_item_ids(&mut document.line_items);
        self.document = document;
        self.updated_at = Utc::now();
    }

    /// Clones this record into a brand-new draft: new id, new
    /// timestamps, re-identified line items, name suffixed with a copy
    /// marker.
    pub fn duplicate(&self) -> Self {
        let mut document = self.document.clone();
        regenerate_line_item_ids(&mut document.line_items);
        document.contract_metadata.contract_name.push_str(COPY_SUFFIX);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: ContractStatus::Draft,
            created_at: now,
            updated_at: now,
            document,
        }
    }
}
