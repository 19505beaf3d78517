use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use model::{ContractDocument, CostType, LineItem, TemplateRecord};

use crate::error::StoreError;

/// Fields for a user-created template. Description and category fall
/// back to an empty string and `"General"` respectively.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub schema: ContractDocument,
}

/// Field-wise template update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub schema: Option<ContractDocument>,
}

/// Ordered in-memory collection of templates, seeded with the two
/// built-in defaults at construction.
#[derive(Debug)]
pub struct TemplateStore {
    records: RwLock<Vec<TemplateRecord>>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(default_templates()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<TemplateRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<TemplateRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    /// All templates, optionally filtered by category
    /// (case-insensitive), in insertion order.
    pub fn list(&self, category: Option<&str>) -> Vec<TemplateRecord> {
        let records = self.read();
        match category {
            Some(category) => records
                .iter()
                .filter(|t| t.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
            None => records.clone(),
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let records = self.read();
        let mut categories: Vec<String> = Vec::new();
        for template in records.iter() {
            if !categories.contains(&template.category) {
                categories.push(template.category.clone());
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Result<TemplateRecord, StoreError> {
        self.read()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::TemplateNotFound)
    }

    pub fn create(&self, new: NewTemplate) -> TemplateRecord {
        let record = TemplateRecord::create(
            new.name,
            new.description.unwrap_or_default(),
            new.category.unwrap_or_else(|| "General".to_string()),
            new.schema,
        );
        tracing::debug!(template_id = %record.id, "template created");
        self.write().push(record.clone());
        record
    }

    /// Merges the provided fields into the stored template. Default
    /// templates are immutable.
    pub fn update(&self, id: &str, update: TemplateUpdate) -> Result<TemplateRecord, StoreError> {
        let mut records = self.write();
        let record = records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TemplateNotFound)?;
        if record.is_default {
            return Err(StoreError::DefaultTemplateImmutable);
        }
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(description) = update.description {
            record.description = description;
        }
        if let Some(category) = update.category {
            record.category = category;
        }
        if let Some(schema) = update.schema {
            record.schema = schema;
        }
        record.updated_at = Utc::now();
        tracing::debug!(template_id = %id, "template updated");
        Ok(record.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.write();
        let index = records
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TemplateNotFound)?;
        if records[index].is_default {
            return Err(StoreError::DefaultTemplateImmutable);
        }
        records.remove(index);
        tracing::debug!(template_id = %id, "template deleted");
        Ok(())
    }

    /// Clones the template's document for a new contract draft with
    /// fresh line-item ids. Nothing is persisted.
    pub fn instantiate(&self, id: &str) -> Result<ContractDocument, StoreError> {
        Ok(self.get(id)?.instantiate())
    }

    /// Copies a template (defaults included) into a new non-default
    /// template and persists the copy.
    pub fn duplicate(&self, id: &str) -> Result<TemplateRecord, StoreError> {
        let mut records = self.write();
        let source = records
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::TemplateNotFound)?;
        let copy = source.duplicate();
        tracing::debug!(source_id = %id, copy_id = %copy.id, "template duplicated");
        records.push(copy.clone());
        Ok(copy)
    }
}

/// The two built-in starting points every deployment ships with.
fn default_templates() -> Vec<TemplateRecord> {
    let now = Utc::now();
    vec![
        TemplateRecord {
            id: "default-service-template".to_string(),
            name: "Standard Service Contract".to_string(),
            description: "A comprehensive template for service-based contracts".to_string(),
            category: "Services".to_string(),
            is_default: true,
            created_at: now,
            updated_at: now,
            schema: ContractDocument {
                line_items: vec![LineItem {
                    id: "sample-1".to_string(),
                    description: "Primary Service".to_string(),
                    cost_type: Some(CostType::OneOff),
                    unit_cost: Some(0.0),
                    quantity: Some(1),
                }],
                ..ContractDocument::default()
            },
        },
        TemplateRecord {
            id: "consulting-template".to_string(),
            name: "Consulting Agreement".to_string(),
            description: "Template for consulting and advisory services".to_string(),
            category: "Consulting".to_string(),
            is_default: true,
            created_at: now,
            updated_at: now,
            schema: ContractDocument {
                line_items: vec![
                    LineItem {
                        id: "consulting-1".to_string(),
                        description: "Consulting Hours".to_string(),
                        cost_type: Some(CostType::OneOff),
                        unit_cost: Some(150.0),
                        quantity: Some(1),
                    },
                    LineItem {
                        id: "consulting-2".to_string(),
                        description: "Monthly Retainer".to_string(),
                        cost_type: Some(CostType::Monthly),
                        unit_cost: Some(2000.0),
                        quantity: Some(1),
                    },
                ],
                ..ContractDocument::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_template(name: &str, category: Option<&str>) -> NewTemplate {
        NewTemplate {
            name: name.into(),
            description: None,
            category: category.map(str::to_string),
            schema: ContractDocument::default(),
        }
    }

    #[test]
    fn store_is_seeded_with_defaults() {
        let store = TemplateStore::new();
        assert_eq!(store.len(), 2);
        let service = store.get("default-service-template").unwrap();
        assert!(service.is_default);
        assert_eq!(service.category, "Services");
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let store = TemplateStore::new();
        let hits = store.list(Some("services"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "default-service-template");
        assert!(store.list(Some("nonexistent")).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let store = TemplateStore::new();
        store.create(new_template("Another services one", Some("Services")));
        store.create(new_template("Uncategorized", None));
        assert_eq!(store.categories(), vec!["Services", "Consulting", "General"]);
    }

    #[test]
    fn create_applies_defaults() {
        let store = TemplateStore::new();
        let record = store.create(new_template("Bare", None));
        assert_eq!(record.category, "General");
        assert_eq!(record.description, "");
        assert!(!record.is_default);
    }

    #[test]
    fn default_templates_reject_update_and_delete() {
        let store = TemplateStore::new();
        assert_eq!(
            store.update("default-service-template", TemplateUpdate::default()),
            Err(StoreError::DefaultTemplateImmutable)
        );
        assert_eq!(
            store.delete("consulting-template"),
            Err(StoreError::DefaultTemplateImmutable)
        );
        // Still present.
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let store = TemplateStore::new();
        let created = store.create(new_template("Original", Some("Ops")));
        let updated = store
            .update(
                &created.id,
                TemplateUpdate {
                    name: Some("Renamed".into()),
                    ..TemplateUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.category, "Ops");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn instantiate_reidentifies_but_does_not_persist() {
        let store = TemplateStore::new();
        let document = store.instantiate("consulting-template").unwrap();
        assert_eq!(document.line_items.len(), 2);
        assert_ne!(document.line_items[0].id, "consulting-1");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicating_a_default_yields_a_mutable_copy() {
        let store = TemplateStore::new();
        let copy = store.duplicate("default-service-template").unwrap();
        assert!(!copy.is_default);
        assert_eq!(copy.name, "Standard Service Contract (Copy)");
        assert_eq!(store.len(), 3);
        // The copy can be deleted even though the source cannot.
        store.delete(&copy.id).unwrap();
    }

    #[test]
    fn unknown_template_is_not_found() {
        let store = TemplateStore::new();
        assert_eq!(store.get("missing"), Err(StoreError::TemplateNotFound));
        assert_eq!(
            store.instantiate("missing"),
            Err(StoreError::TemplateNotFound)
        );
        assert_eq!(
            store.duplicate("missing").map(|t| t.id),
            Err(StoreError::TemplateNotFound)
        );
    }
}
