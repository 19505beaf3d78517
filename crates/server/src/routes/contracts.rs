use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use model::{ContractDocument, ContractRecord, ContractStatus};
use pricing::ContractTotals;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Listing row: header fields plus the freshly recomputed total value.
/// Totals are derived state; they are priced per request, never read
/// from storage.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub id: Uuid,
    pub contract_name: String,
    pub client_name: String,
    pub effective_date: String,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_value: ContractTotals,
}

impl From<&ContractRecord> for ContractSummary {
    fn from(record: &ContractRecord) -> Self {
        Self {
            id: record.id,
            contract_name: record.document.contract_metadata.contract_name.clone(),
            client_name: record.document.contract_metadata.client_name.clone(),
            effective_date: record.document.contract_metadata.effective_date.clone(),
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            total_value: pricing::price(&record.document),
        }
    }
}

// Schema gate shared by create and update: validate the raw payload
// first so malformed bodies come back as structured reports, then
// deserialize into the typed document.
fn gated_document(payload: &Value) -> Result<ContractDocument, ServerError> {
    let report = validation::validate_contract(payload);
    if !report.is_valid {
        return Err(ServerError::Validation(report.errors));
    }
    Ok(serde_json::from_value(payload.clone())?)
}

/// GET /api/contracts - list all contracts as summaries
pub async fn list_contracts(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let summaries: Vec<ContractSummary> = state
        .contracts
        .list()
        .iter()
        .map(ContractSummary::from)
        .collect();

    Ok(Json(json!({
        "status": "success",
        "data": summaries,
        "count": summaries.len(),
    })))
}

/// GET /api/contracts/{id} - fetch one contract
pub async fn get_contract(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<impl IntoResponse> {
    let record = state.contracts.get(id)?;
    Ok(Json(json!({
        "status": "success",
        "data": record,
    })))
}

/// POST /api/contracts - create a contract after the schema gate
pub async fn create_contract(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<Value>,
) -> ServerResult<impl IntoResponse> {
    let document = gated_document(&payload)?;
    let record = state.contracts.create(document);
    metrics::counter!("quoteforge_contracts_created_total").increment(1);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Contract created successfully",
            "data": record,
        })),
    ))
}

/// PUT /api/contracts/{id} - replace a contract's document
pub async fn update_contract(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ServerResult<impl IntoResponse> {
    let document = gated_document(&payload)?;
    let record = state.contracts.update(id, document)?;
    metrics::counter!("quoteforge_contracts_updated_total").increment(1);

    Ok(Json(json!({
        "status": "success",
        "message": "Contract updated successfully",
        "data": record,
    })))
}

/// DELETE /api/contracts/{id}
pub async fn delete_contract(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<impl IntoResponse> {
    state.contracts.delete(id)?;
    metrics::counter!("quoteforge_contracts_deleted_total").increment(1);

    Ok(Json(json!({
        "status": "success",
        "message": "Contract deleted successfully",
    })))
}

/// POST /api/contracts/{id}/duplicate - copy into a fresh draft
pub async fn duplicate_contract(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<impl IntoResponse> {
    let record = state.contracts.duplicate(id)?;
    metrics::counter!("quoteforge_contracts_duplicated_total").increment(1);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Contract duplicated successfully",
            "data": record,
        })),
    ))
}

/// POST /api/contracts/validate - dry-run check without saving
///
/// Invalid documents come back as the standard 400 validation
/// response; valid ones return their priced totals so clients can
/// preview before saving.
pub async fn validate_contract(Json(payload): Json<Value>) -> ServerResult<impl IntoResponse> {
    let document = gated_document(&payload)?;
    let totals = pricing::price(&document);

    Ok(Json(json!({
        "status": "valid",
        "message": "Contract data is valid",
        "totals": totals,
    })))
}
