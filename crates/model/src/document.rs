use serde::{Deserialize, Serialize};

/// Schema version stamped on new documents.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// A contract document as exchanged with clients.
///
/// This is the transient, editable shape: no id, no status, no
/// timestamps. Those belong to [`crate::ContractRecord`] once the
/// document is persisted. Derived totals are never part of this type;
/// they are recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDocument {
    /// Semantic version tag. Informational only; nothing branches on it.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default)]
    pub contract_metadata: ContractMetadata,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub discounts: Vec<Discount>,
}

impl Default for ContractDocument {
    fn default() -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            contract_metadata: ContractMetadata::default(),
            line_items: Vec::new(),
            discounts: Vec::new(),
        }
    }
}

fn default_schema_version() -> String {
    DEFAULT_SCHEMA_VERSION.to_string()
}

/// Human-facing contract header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub client_name: String,
    /// Effective date in `YYYY-MM-DD` form. Kept as a string on the
    /// wire; the schema's date format check is the only gate.
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub project_description: String,
}

/// How a line item's cost recurs.
///
/// Unknown wire values land in `Other` rather than failing
/// deserialization: the calculator silently drops them, and only the
/// schema validator rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    #[serde(rename = "one-off")]
    OneOff,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "yearly")]
    Yearly,
    /// Catch-all for values outside the known set.
    #[serde(untagged)]
    Other(String),
}

/// One billable entry in a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within the document. Empty until assigned; see
    /// [`crate::ensure_line_item_ids`].
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub cost_type: Option<CostType>,

    /// Cost per unit. Missing is priced as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Number of units. Missing is priced as 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl LineItem {
    /// A blank one-off item, the shape editors start from.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            cost_type: Some(CostType::OneOff),
            unit_cost: Some(0.0),
            quantity: Some(1),
        }
    }
}

/// How a discount reduces the one-off subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
    /// Catch-all for values outside the known set.
    #[serde(untagged)]
    Other(String),
}

/// A percentage or fixed reduction applied to the one-off subtotal.
///
/// Discounts carry no id; they are addressed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub kind: Option<DiscountType>,

    #[serde(default)]
    pub value: f64,
}

impl Discount {
    /// A blank percentage discount, the shape editors start from.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            kind: Some(DiscountType::Percentage),
            value: 0.0,
        }
    }
}
