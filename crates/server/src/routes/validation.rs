use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use validation::{rules_catalog, FieldError, SCHEMA_ID};

/// Per-document result in a bulk validation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    pub index: usize,
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

/// POST /api/validation/contract - standalone schema check
///
/// Unlike the persistence gate, an invalid document here is a 200 with
/// a structured report: callers asked for the verdict, not for an
/// operation to be carried out.
pub async fn validate_contract(Json(payload): Json<Value>) -> ServerResult<impl IntoResponse> {
    let report = validation::validate_contract(&payload);

    if !report.is_valid {
        return Ok(Json(json!({
            "status": "invalid",
            "isValid": false,
            "message": "Contract validation failed",
            "errors": report.errors,
            "errorCount": report.errors.len(),
        })));
    }

    Ok(Json(json!({
        "status": "valid",
        "isValid": true,
        "message": "Contract data is valid",
        "schema": SCHEMA_ID,
    })))
}

/// GET /api/validation/schema - the contract schema itself
pub async fn get_schema() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "success",
        "data": validation::contract_schema(),
    })))
}

/// POST /api/validation/bulk - validate many documents in one call
pub async fn validate_bulk(Json(payload): Json<Value>) -> ServerResult<impl IntoResponse> {
    let contracts = payload
        .get("contracts")
        .and_then(Value::as_array)
        .ok_or_else(|| ServerError::BadRequest("Expected an array of contracts".to_string()))?;

    let results: Vec<BulkResult> = contracts
        .iter()
        .enumerate()
        .map(|(index, contract)| {
            let report = validation::validate_contract(contract);
            BulkResult {
                index,
                is_valid: report.is_valid,
                errors: report.errors,
            }
        })
        .collect();

    let valid = results.iter().filter(|r| r.is_valid).count();
    let invalid = results.len() - valid;

    Ok(Json(json!({
        "status": "success",
        "summary": {
            "total": results.len(),
            "valid": valid,
            "invalid": invalid,
        },
        "results": results,
    })))
}

/// GET /api/validation/rules - constraint catalog for client-side hints
pub async fn get_rules() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "success",
        "data": rules_catalog(),
    })))
}
