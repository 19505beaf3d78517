use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use model::{ContractDocument, ContractRecord};
use uuid::Uuid;

use crate::error::StoreError;

/// Ordered in-memory collection of contract records.
///
/// Constructed empty at startup. All mutation goes through the typed
/// methods; records handed out are clones, so callers can never alias
/// the stored state.
#[derive(Debug, Default)]
pub struct ContractStore {
    records: RwLock<Vec<ContractRecord>>,
}

impl ContractStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ContractRecord>> {
        // A poisoned lock only means a panic elsewhere mid-read; the
        // Vec itself is still structurally sound.
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ContractRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<ContractRecord> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: Uuid) -> Result<ContractRecord, StoreError> {
        self.read()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::ContractNotFound)
    }

    /// Persists a new draft built from the submitted document.
    ///
    /// The caller is expected to have validated the document already;
    /// the store only assigns identity (record id, line-item ids,
    /// timestamps, draft status).
    pub fn create(&self, document: ContractDocument) -> ContractRecord {
        let record = ContractRecord::create(document);
        tracing::debug!(contract_id = %record.id, "contract created");
        self.write().push(record.clone());
        record
    }

    /// Replaces the stored document for `id` wholesale and stamps a
    /// fresh `updatedAt`.
    pub fn update(&self, id: Uuid, document: ContractDocument) -> Result<ContractRecord, StoreError> {
        let mut records = self.write();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::ContractNotFound)?;
        record.replace_document(document);
        tracing::debug!(contract_id = %id, "contract updated");
        Ok(record.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.write();
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::ContractNotFound)?;
        records.remove(index);
        tracing::debug!(contract_id = %id, "contract deleted");
        Ok(())
    }

    /// Copies an existing contract into a new draft with fresh identity
    /// and a copy-suffixed name, and persists the copy.
    pub fn duplicate(&self, id: Uuid) -> Result<ContractRecord, StoreError> {
        let mut records = self.write();
        let source = records
            .iter()
            .find(|record| record.id == id)
            .ok_or(StoreError::ContractNotFound)?;
        let copy = source.duplicate();
        tracing::debug!(source_id = %id, copy_id = %copy.id, "contract duplicated");
        records.push(copy.clone());
        Ok(copy)
    }
}
