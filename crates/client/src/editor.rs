use model::{ContractDocument, Discount, LineItem};
use pricing::{price, ContractTotals};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::patch::{DiscountPatch, LineItemPatch, MetadataPatch};

/// Failures when loading an externally-supplied document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse contract data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but is missing the marker fields every
    /// contract document carries.
    #[error("Invalid contract format")]
    InvalidFormat,
}

/// Handle for removing a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ContractDocument, &ContractTotals) + Send>;

/// The in-progress contract document plus its derived totals.
///
/// Every mutation recomputes the totals synchronously before any
/// subscriber runs, so observers always see a document and totals that
/// agree. Totals are derived state only; they never travel with the
/// document.
pub struct EditorStore {
    document: ContractDocument,
    totals: ContractTotals,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// An editor over the empty v1.0.0 document.
    pub fn new() -> Self {
        let document = ContractDocument::default();
        let totals = price(&document);
        Self {
            document,
            totals,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn document(&self) -> &ContractDocument {
        &self.document
    }

    /// The current derived totals. Always in sync with [`document`].
    ///
    /// [`document`]: Self::document
    pub fn totals(&self) -> ContractTotals {
        self.totals
    }

    /// Registers a callback invoked after every mutation with the
    /// updated document and totals.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&ContractDocument, &ContractTotals) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    // Every mutation funnels through here: recompute first, notify
    // second, so subscribers never see a stale pair.
    fn mutate(&mut self, apply: impl FnOnce(&mut ContractDocument)) {
        apply(&mut self.document);
        self.totals = price(&self.document);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.document, &self.totals);
        }
    }

    /// Appends a blank one-off line item and returns its generated id.
    pub fn add_line_item(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        let item = LineItem::blank(id.clone());
        self.mutate(|doc| doc.line_items.push(item));
        id
    }

    /// Removes the line item with `id`; returns whether it existed.
    pub fn remove_line_item(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.mutate(|doc| {
            let before = doc.line_items.len();
            doc.line_items.retain(|item| item.id != id);
            removed = doc.line_items.len() != before;
        });
        removed
    }

    /// Applies a field-level patch to the line item with `id`; returns
    /// whether it existed. Unknown ids are a silent no-op for the
    /// document, though subscribers still observe the (unchanged)
    /// state.
    pub fn update_line_item(&mut self, id: &str, patch: LineItemPatch) -> bool {
        let mut found = false;
        self.mutate(|doc| {
            if let Some(item) = doc.line_items.iter_mut().find(|item| item.id == id) {
                patch.apply(item);
                found = true;
            }
        });
        found
    }

    /// Appends a blank percentage discount and returns its position.
    pub fn add_discount(&mut self) -> usize {
        let mut index = 0;
        self.mutate(|doc| {
            doc.discounts.push(Discount::blank());
            index = doc.discounts.len() - 1;
        });
        index
    }

    /// Removes the discount at `index`; returns whether it existed.
    pub fn remove_discount(&mut self, index: usize) -> bool {
        let mut removed = false;
        self.mutate(|doc| {
            if index < doc.discounts.len() {
                doc.discounts.remove(index);
                removed = true;
            }
        });
        removed
    }

    /// Applies a field-level patch to the discount at `index`; returns
    /// whether it existed.
    pub fn update_discount(&mut self, index: usize, patch: DiscountPatch) -> bool {
        let mut found = false;
        self.mutate(|doc| {
            if let Some(discount) = doc.discounts.get_mut(index) {
                patch.apply(discount);
                found = true;
            }
        });
        found
    }

    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        self.mutate(|doc| patch.apply(&mut doc.contract_metadata));
    }

    /// Discards the working document for the empty v1.0.0 shape.
    pub fn reset(&mut self) {
        self.mutate(|doc| *doc = ContractDocument::default());
    }

    /// Replaces the working document with a JSON payload, typically a
    /// record fetched from the server. The payload must carry
    /// `schemaVersion` and `contractMetadata`; anything else fails with
    /// a structured error and leaves the current document untouched.
    pub fn load_str(&mut self, json: &str) -> Result<(), LoadError> {
        let value: Value = serde_json::from_str(json)?;
        self.load_value(value)
    }

    /// As [`load_str`], for an already-parsed value.
    ///
    /// [`load_str`]: Self::load_str
    pub fn load_value(&mut self, value: Value) -> Result<(), LoadError> {
        if value.get("schemaVersion").is_none() || value.get("contractMetadata").is_none() {
            return Err(LoadError::InvalidFormat);
        }
        let document: ContractDocument = serde_json::from_value(value)?;
        self.mutate(|doc| *doc = document);
        Ok(())
    }
}
