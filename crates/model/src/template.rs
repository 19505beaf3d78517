use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::ContractDocument;
use crate::ids::regenerate_line_item_ids;
use crate::record::COPY_SUFFIX;

/// A reusable contract starting point.
///
/// Templates carry a full [`ContractDocument`] under `schema`; using a
/// template clones that document with fresh line-item ids. Template ids
/// are plain strings so seeded defaults can use stable, readable slugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Seeded templates are immutable; the store refuses update/delete.
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schema: ContractDocument,
}

impl TemplateRecord {
    /// Builds a user-created template with a generated id.
    pub fn create(
        name: String,
        description: String,
        category: String,
        schema: ContractDocument,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            category,
            is_default: false,
            created_at: now,
            updated_at: now,
            schema,
        }
    }

    /// Clones the template's document for a new contract draft, with
    /// every line item re-identified. The template itself is untouched.
    pub fn instantiate(&self) -> ContractDocument {
        let mut document = self.schema.clone();
        regenerate_line_item_ids(&mut document.line_items);
        document
    }

    /// Copies this template under a new id and copy-suffixed name.
    /// Copies are never default, regardless of the source.
    pub fn duplicate(&self) -> Self {
        let mut schema = self.schema.clone();
        regenerate_line_item_ids(&mut schema.line_items);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            description: self.description.clone(),
            category: self.category.clone(),
            is_default: false,
            created_at: now,
            updated_at: now,
            schema,
        }
    }
}
