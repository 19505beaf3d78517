use quoteforge::{price, ContractDocument, CostType, Discount, DiscountType, LineItem};
use serde_json::json;

fn document(value: serde_json::Value) -> ContractDocument {
    serde_json::from_value(value).expect("document deserializes")
}

#[test]
fn pricing_is_idempotent() {
    let doc = document(json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": { "contractName": "Repeat", "clientName": "Acme", "effectiveDate": "2026-01-01" },
        "lineItems": [
            { "description": "Build", "costType": "one-off", "unitCost": 499.99, "quantity": 3 },
            { "description": "Care", "costType": "monthly", "unitCost": 75.5, "quantity": 2 }
        ],
        "discounts": [
            { "description": "Promo", "type": "percentage", "value": 12.5 }
        ]
    }));

    let first = price(&doc);
    for _ in 0..5 {
        assert_eq!(price(&doc), first);
    }
}

#[test]
fn pricing_does_not_mutate_its_input() {
    let doc = document(json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": { "contractName": "Frozen", "clientName": "Acme", "effectiveDate": "2026-01-01" },
        "lineItems": [
            { "id": "item-1", "description": "Build", "costType": "one-off", "unitCost": 10, "quantity": 1 }
        ]
    }));
    let before = serde_json::to_value(&doc).expect("serializes");

    let _ = price(&doc);

    assert_eq!(serde_json::to_value(&doc).expect("serializes"), before);
}

#[test]
fn over_full_discounts_clamp_to_zero_without_going_negative() {
    let mut doc = ContractDocument::default();
    doc.line_items.push(LineItem {
        id: "a".into(),
        description: "Build".into(),
        cost_type: Some(CostType::OneOff),
        unit_cost: Some(100.0),
        quantity: Some(1),
    });
    doc.discounts.push(Discount {
        description: "Everything and more".into(),
        kind: Some(DiscountType::Percentage),
        value: 150.0,
    });

    let totals = price(&doc);
    assert_eq!(totals.subtotal, 100.0);
    assert_eq!(totals.discount_amount, 150.0);
    assert_eq!(totals.final_one_off_total, 0.0);
    assert_eq!(totals.total_first_year, 0.0);
}

#[test]
fn unknown_cost_and_discount_types_never_contribute() {
    let doc = document(json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": { "contractName": "Odd", "clientName": "Acme", "effectiveDate": "2026-01-01" },
        "lineItems": [
            { "description": "Known", "costType": "one-off", "unitCost": 40, "quantity": 1 },
            { "description": "Mystery", "costType": "quarterly", "unitCost": 1000, "quantity": 4 }
        ],
        "discounts": [
            { "description": "Mystery cut", "type": "loyalty", "value": 99 }
        ]
    }));

    let totals = price(&doc);
    assert_eq!(totals.subtotal, 40.0);
    assert_eq!(totals.discount_amount, 0.0);
    assert_eq!(totals.final_one_off_total, 40.0);
    // Counts still reflect everything present, contributing or not.
    assert_eq!(totals.line_item_count, 2);
    assert_eq!(totals.discount_count, 1);
}

#[test]
fn missing_cost_fields_fall_back_to_defaults() {
    let doc = document(json!({
        "schemaVersion": "1.0.0",
        "contractMetadata": { "contractName": "Sparse", "clientName": "Acme", "effectiveDate": "2026-01-01" },
        "lineItems": [
            { "description": "No cost", "costType": "one-off" },
            { "description": "No quantity", "costType": "one-off", "unitCost": 25 }
        ]
    }));

    // unitCost defaults to 0, quantity defaults to 1.
    let totals = price(&doc);
    assert_eq!(totals.subtotal, 25.0);
}
