//! QuoteForge contract data model.
//!
//! This crate defines the wire-shape types shared by every other layer:
//! the transient [`ContractDocument`] that clients edit and submit, the
//! persisted [`ContractRecord`] / [`TemplateRecord`] the server stores,
//! and the id-assignment helpers that uphold the line-item identity
//! invariant.
//!
//! ## Wire contract
//!
//! Every type serializes in camelCase so the JSON shape matches the
//! documents exchanged with clients exactly (`schemaVersion`,
//! `contractMetadata`, `lineItems`, `unitCost`, ...). Serialization is
//! the contract; field names here are an implementation detail.
//!
//! ## Permissiveness
//!
//! The typed model deliberately tolerates partial documents: `unitCost`
//! and `quantity` are optional (the pricing layer applies documented
//! defaults), and `costType` / discount `type` keep unknown strings in a
//! catch-all variant instead of failing deserialization. Rejecting bad
//! values is the validator's job, not the model's.

mod document;
mod ids;
mod record;
mod template;

pub use crate::document::{
    ContractDocument, ContractMetadata, CostType, Discount, DiscountType, LineItem,
    DEFAULT_SCHEMA_VERSION,
};
pub use crate::ids::{ensure_line_item_ids, regenerate_line_item_ids};
pub use crate::record::{ContractRecord, ContractStatus, COPY_SUFFIX};
pub use crate::template::TemplateRecord;
