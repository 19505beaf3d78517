use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use model::{ContractDocument, TemplateRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use store::{NewTemplate, TemplateUpdate};

/// Query parameters for template listing
#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    /// Case-insensitive category filter
    #[serde(default)]
    pub category: Option<String>,
}

/// Request to create a template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub schema: ContractDocument,
}

/// Request to update a template; omitted fields keep their values
#[derive(Debug, Deserialize)]
pub struct UpdateTemplateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub schema: Option<ContractDocument>,
}

/// Listing row: everything but the embedded document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&TemplateRecord> for TemplateSummary {
    fn from(record: &TemplateRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            is_default: record.is_default,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// GET /api/templates - list templates, optionally by category
pub async fn list_templates(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<TemplateListQuery>,
) -> ServerResult<impl IntoResponse> {
    let summaries: Vec<TemplateSummary> = state
        .templates
        .list(query.category.as_deref())
        .iter()
        .map(TemplateSummary::from)
        .collect();

    Ok(Json(json!({
        "status": "success",
        "data": summaries,
        "count": summaries.len(),
    })))
}

/// GET /api/templates/categories - distinct categories
pub async fn list_categories(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "success",
        "data": state.templates.categories(),
    })))
}

/// GET /api/templates/{id}
pub async fn get_template(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let record = state.templates.get(&id)?;
    Ok(Json(json!({
        "status": "success",
        "data": record,
    })))
}

/// POST /api/templates - create a user template
pub async fn create_template(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<CreateTemplateRequest>,
) -> ServerResult<impl IntoResponse> {
    let record = state.templates.create(NewTemplate {
        name: request.name,
        description: request.description,
        category: request.category,
        schema: request.schema,
    });
    metrics::counter!("quoteforge_templates_created_total").increment(1);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Template created successfully",
            "data": record,
        })),
    ))
}

/// PUT /api/templates/{id} - merge updates; defaults are immutable
pub async fn update_template(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTemplateRequest>,
) -> ServerResult<impl IntoResponse> {
    let record = state.templates.update(
        &id,
        TemplateUpdate {
            name: request.name,
            description: request.description,
            category: request.category,
            schema: request.schema,
        },
    )?;

    Ok(Json(json!({
        "status": "success",
        "message": "Template updated successfully",
        "data": record,
    })))
}

/// DELETE /api/templates/{id} - defaults are immutable
pub async fn delete_template(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    state.templates.delete(&id)?;

    Ok(Json(json!({
        "status": "success",
        "message": "Template deleted successfully",
    })))
}

/// POST /api/templates/{id}/use - clone the template's document for a
/// new draft. Nothing is persisted; the client decides when to save.
pub async fn use_template(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let document = state.templates.instantiate(&id)?;
    metrics::counter!("quoteforge_templates_used_total").increment(1);

    Ok(Json(json!({
        "status": "success",
        "message": "Contract initialized from template",
        "data": document,
    })))
}

/// POST /api/templates/{id}/duplicate
pub async fn duplicate_template(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let record = state.templates.duplicate(&id)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Template duplicated successfully",
            "data": record,
        })),
    ))
}
