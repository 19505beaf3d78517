//! QuoteForge in-memory stores.
//!
//! Ordered, lock-guarded collections for contracts and templates.
//! Stores are explicit objects constructed at startup and injected into
//! whatever needs them; there is no ambient global state. Each
//! operation runs under a single lock acquisition, so callers never
//! observe a half-applied mutation.
//!
//! Backed by plain `Vec`s behind `RwLock`s. That is deliberate: the
//! service holds everything in memory, and insertion order is part of
//! the observable contract (listings and category order follow it). A
//! real datastore would slot in behind the same method surface.

mod contracts;
mod error;
mod templates;

pub use crate::contracts::ContractStore;
pub use crate::error::StoreError;
pub use crate::templates::{NewTemplate, TemplateStore, TemplateUpdate};
