//! HTTP handlers for template endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{
    GetTemplateHandler, GetTemplateQuery, ListTemplatesHandler, ListTemplatesQuery,
};
use crate::domain::foundation::TemplateId;
use crate::domain::template::ContractTemplate;

use super::dto::{ListTemplatesParams, TemplateListResponse};

#[derive(Clone)]
pub struct TemplatesAppState {
    pub list: Arc<ListTemplatesHandler>,
    pub get: Arc<GetTemplateHandler>,
}

/// GET /api/templates - Template library, optionally by category
pub async fn list_templates(
    State(state): State<TemplatesAppState>,
    Query(params): Query<ListTemplatesParams>,
) -> Json<TemplateListResponse> {
    let result = state.list.handle(ListTemplatesQuery {
        category: params.category,
    });
    Json(result.into())
}

/// GET /api/templates/:id - One template with its full text
pub async fn get_template(
    State(state): State<TemplatesAppState>,
    Path(id): Path<String>,
) -> Result<Json<ContractTemplate>, ApiError> {
    let template_id = TemplateId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let template = state.get.handle(GetTemplateQuery { template_id })?;
    Ok(Json(template))
}
