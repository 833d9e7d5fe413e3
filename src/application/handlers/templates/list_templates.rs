//! ListTemplatesHandler - Query handler for the template library.

use std::sync::Arc;

use crate::domain::template::{CategoryFilter, ContractTemplate, TemplateCatalog};

#[derive(Debug, Clone, Default)]
pub struct ListTemplatesQuery {
    pub category: CategoryFilter,
}

/// Templates in the selected category plus the selector options.
#[derive(Debug, Clone)]
pub struct ListTemplatesResult {
    pub categories: Vec<CategoryFilter>,
    pub selected: CategoryFilter,
    pub templates: Vec<ContractTemplate>,
}

pub struct ListTemplatesHandler {
    catalog: Arc<TemplateCatalog>,
}

impl ListTemplatesHandler {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: ListTemplatesQuery) -> ListTemplatesResult {
        let templates = self
            .catalog
            .filter(&query.category)
            .into_iter()
            .cloned()
            .collect();
        ListTemplatesResult {
            categories: self.catalog.categories(),
            selected: query.category,
            templates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ListTemplatesHandler {
        ListTemplatesHandler::new(Arc::new(TemplateCatalog::builtin().clone()))
    }

    #[test]
    fn all_returns_every_template() {
        let result = handler().handle(ListTemplatesQuery::default());
        assert_eq!(result.templates.len(), 3);
        assert_eq!(result.selected, CategoryFilter::All);
        assert_eq!(
            result.categories.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            vec!["All", "Employment", "Services", "Lease"]
        );
    }

    #[test]
    fn category_selects_matching_templates() {
        let result = handler().handle(ListTemplatesQuery {
            category: CategoryFilter::Category("Lease".to_string()),
        });
        assert_eq!(result.templates.len(), 1);
        assert_eq!(result.templates[0].id.as_str(), "t3");
    }

    #[test]
    fn unknown_category_is_empty() {
        let result = handler().handle(ListTemplatesQuery {
            category: CategoryFilter::Category("Partnership".to_string()),
        });
        assert!(result.templates.is_empty());
        assert_eq!(result.categories.len(), 4);
    }
}
