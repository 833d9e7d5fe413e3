//! ContractTemplate - a reusable contract skeleton.

use serde::Serialize;

use crate::domain::foundation::TemplateId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTemplate {
    pub id: TemplateId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub content: String,
}
