use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Human-readable catalog of the constraints the schema enforces, plus
/// the business limits around them. Served by the API so clients can
/// render field-level guidance without parsing the schema themselves.
///
/// This is documentation of the schema, not a second rule set: the
/// schema file stays the single source of truth for what actually
/// passes validation.
pub fn rules_catalog() -> &'static Value {
    static RULES: Lazy<Value> = Lazy::new(|| {
        json!({
            "contractMetadata": {
                "contractName": {
                    "required": true,
                    "minLength": 1,
                    "maxLength": 200,
                    "description": "A unique name for the contract"
                },
                "clientName": {
                    "required": true,
                    "minLength": 1,
                    "maxLength": 200,
                    "description": "Name of the client organization or individual"
                },
                "effectiveDate": {
                    "required": true,
                    "format": "date",
                    "description": "Date when the contract becomes effective (YYYY-MM-DD)"
                },
                "projectDescription": {
                    "required": false,
                    "maxLength": 1000,
                    "description": "Optional description of the project or services"
                }
            },
            "lineItems": {
                "description": {
                    "required": true,
                    "minLength": 1,
                    "maxLength": 500,
                    "description": "Description of the service or product"
                },
                "costType": {
                    "required": true,
                    "enum": ["one-off", "monthly", "yearly"],
                    "description": "Type of cost: one-time, monthly recurring, or yearly recurring"
                },
                "unitCost": {
                    "required": true,
                    "type": "number",
                    "minimum": 0,
                    "maximum": 1_000_000,
                    "description": "Cost per unit in dollars"
                },
                "quantity": {
                    "required": true,
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10_000,
                    "description": "Number of units"
                }
            },
            "discounts": {
                "description": {
                    "required": true,
                    "minLength": 1,
                    "maxLength": 200,
                    "description": "Description of the discount"
                },
                "type": {
                    "required": true,
                    "enum": ["percentage", "fixed"],
                    "description": "Type of discount: percentage or fixed amount"
                },
                "value": {
                    "required": true,
                    "type": "number",
                    "minimum": 0,
                    "description": "Discount value (0-100 for percentage, any positive number for fixed)"
                }
            },
            "businessRules": {
                "maxLineItems": 100,
                "maxDiscounts": 10,
                "supportedCurrencies": ["USD"],
                "dateFormat": "YYYY-MM-DD",
                "schemaVersion": "1.0.0"
            }
        })
    });
    &RULES
}
