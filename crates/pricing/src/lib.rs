//! QuoteForge pricing layer.
//!
//! One pure function, [`price`], maps a contract document to its
//! derived financial summary. Both the HTTP service and the client
//! editor call this same module, so the two sides of the wire can never
//! drift apart.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. Accumulation follows
//! document order, so the same document always prices to the same
//! totals on any machine.
//!
//! ## Permissiveness
//!
//! Pricing never rejects anything. Missing `unitCost` prices as 0,
//! missing `quantity` as 1, and line items or discounts with unknown
//! type values contribute nothing. Rejecting malformed documents is the
//! validator's job; this split is deliberate.

mod totals;

pub use crate::totals::{price, ContractTotals};
