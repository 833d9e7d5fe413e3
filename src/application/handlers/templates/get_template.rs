//! GetTemplateHandler - Query handler for a single template.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TemplateId};
use crate::domain::template::{ContractTemplate, TemplateCatalog};

#[derive(Debug, Clone)]
pub struct GetTemplateQuery {
    pub template_id: TemplateId,
}

pub struct GetTemplateHandler {
    catalog: Arc<TemplateCatalog>,
}

impl GetTemplateHandler {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetTemplateQuery) -> Result<ContractTemplate, DomainError> {
        self.catalog
            .find(&query.template_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TemplateNotFound, "Template not found")
                    .with_detail("template_id", query.template_id.as_str())
            })
    }
}
