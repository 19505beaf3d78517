use model::{ContractDocument, CostType, DiscountType};
use serde::{Deserialize, Serialize};

/// Derived financial summary of a contract document.
///
/// Never persisted; always recomputed from the current document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTotals {
    /// Sum of one-off line items before discounts.
    pub subtotal: f64,
    /// Total reduction across all discounts, each computed against the
    /// original subtotal (additive, not sequential).
    pub discount_amount: f64,
    /// `max(0, subtotal - discountAmount)`. Never negative.
    pub final_one_off_total: f64,
    pub monthly_recurring: f64,
    pub yearly_recurring: f64,
    /// One-off total plus twelve months of monthly and one year of
    /// yearly recurring cost.
    pub total_first_year: f64,
    pub line_item_count: usize,
    pub discount_count: usize,
}

/// Computes the totals summary for a document.
///
/// Line items accumulate `unitCost x quantity` into exactly one of the
/// three buckets according to their cost type; items with a missing or
/// unknown cost type are dropped without error. Discounts then reduce
/// the one-off subtotal: percentage discounts take `value`% of the
/// original subtotal, fixed discounts take `value` directly. Percentage
/// values above 100 are not capped; only the final clamp to zero
/// applies.
pub fn price(document: &ContractDocument) -> ContractTotals {
    let mut subtotal = 0.0;
    let mut monthly_recurring = 0.0;
    let mut yearly_recurring = 0.0;

    for item in &document.line_items {
        let item_total = item.unit_cost.unwrap_or(0.0) * item.quantity.unwrap_or(1) as f64;
        match item.cost_type {
            Some(CostType::OneOff) => subtotal += item_total,
            Some(CostType::Monthly) => monthly_recurring += item_total,
            Some(CostType::Yearly) => yearly_recurring += item_total,
            Some(CostType::Other(_)) | None => {}
        }
    }

    let mut discount_amount = 0.0;
    for discount in &document.discounts {
        match discount.kind {
            Some(DiscountType::Percentage) => discount_amount += subtotal * (discount.value / 100.0),
            Some(DiscountType::Fixed) => discount_amount += discount.value,
            Some(DiscountType::Other(_)) | None => {}
        }
    }

    let final_one_off_total = (subtotal - discount_amount).max(0.0);
    let total_first_year = final_one_off_total + monthly_recurring * 12.0 + yearly_recurring;

    ContractTotals {
        subtotal,
        discount_amount,
        final_one_off_total,
        monthly_recurring,
        yearly_recurring,
        total_first_year,
        line_item_count: document.line_items.len(),
        discount_count: document.discounts.len(),
    }
}
