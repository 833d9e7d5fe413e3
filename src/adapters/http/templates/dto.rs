//! HTTP DTOs for template endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ListTemplatesResult;
use crate::domain::template::{CategoryFilter, ContractTemplate};

/// `?category=All|Employment|...`; absent or blank means all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTemplatesParams {
    #[serde(default)]
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListResponse {
    pub categories: Vec<CategoryFilter>,
    pub selected: CategoryFilter,
    pub templates: Vec<ContractTemplate>,
}

impl From<ListTemplatesResult> for TemplateListResponse {
    fn from(result: ListTemplatesResult) -> Self {
        Self {
            categories: result.categories,
            selected: result.selected,
            templates: result.templates,
        }
    }
}
