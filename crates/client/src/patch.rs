use model::{CostType, Discount, DiscountType, LineItem};

/// Field-level update for a line item; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct LineItemPatch {
    pub description: Option<String>,
    pub cost_type: Option<CostType>,
    pub unit_cost: Option<f64>,
    pub quantity: Option<i64>,
}

impl LineItemPatch {
    pub(crate) fn apply(self, item: &mut LineItem) {
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(cost_type) = self.cost_type {
            item.cost_type = Some(cost_type);
        }
        if let Some(unit_cost) = self.unit_cost {
            item.unit_cost = Some(unit_cost);
        }
        if let Some(quantity) = self.quantity {
            item.quantity = Some(quantity);
        }
    }
}

/// Field-level update for a discount; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct DiscountPatch {
    pub description: Option<String>,
    pub kind: Option<DiscountType>,
    pub value: Option<f64>,
}

impl DiscountPatch {
    pub(crate) fn apply(self, discount: &mut Discount) {
        if let Some(description) = self.description {
            discount.description = description;
        }
        if let Some(kind) = self.kind {
            discount.kind = Some(kind);
        }
        if let Some(value) = self.value {
            discount.value = value;
        }
    }
}

/// Field-level update for the contract header.
#[derive(Debug, Clone, Default)]
pub struct MetadataPatch {
    pub contract_name: Option<String>,
    pub client_name: Option<String>,
    pub effective_date: Option<String>,
    pub project_description: Option<String>,
}

impl MetadataPatch {
    pub(crate) fn apply(self, metadata: &mut model::ContractMetadata) {
        if let Some(contract_name) = self.contract_name {
            metadata.contract_name = contract_name;
        }
        if let Some(client_name) = self.client_name {
            metadata.client_name = client_name;
        }
        if let Some(effective_date) = self.effective_date {
            metadata.effective_date = effective_date;
        }
        if let Some(project_description) = self.project_description {
            metadata.project_description = project_description;
        }
    }
}
