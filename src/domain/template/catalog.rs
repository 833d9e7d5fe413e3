//! TemplateCatalog - the static set of templates shipped with the service.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::TemplateId;

use super::ContractTemplate;

static BUILTIN: Lazy<TemplateCatalog> = Lazy::new(|| {
    TemplateCatalog::new(vec![
        builtin(
            "t1",
            "Standard Employment Agreement (India)",
            "Employment",
            "Basic employment contract for Indian SMEs including probation, notice periods, and IP clauses.",
            "This Employment Agreement is made on [Date] between [Company Name] and [Employee Name]...",
        ),
        builtin(
            "t2",
            "Vendor Service Contract",
            "Services",
            "Agreement for procurement of services, focusing on deliverables, payments, and termination.",
            "This Service Agreement is entered into by [Client] and [Service Provider]...",
        ),
        builtin(
            "t3",
            "Commercial Lease Agreement",
            "Lease",
            "Lease document for office spaces, covering security deposit and maintenance terms.",
            "This Lease Agreement is made between [Lessor] and [Lessee] for the premises located at...",
        ),
    ])
});

fn builtin(id: &'static str, title: &str, category: &str, description: &str, content: &str) -> ContractTemplate {
    ContractTemplate {
        id: TemplateId::from_static(id),
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        content: content.to_string(),
    }
}

/// Category selector: `All` is the identity, a named category matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, template: &ContractTemplate) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => template.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Category(name) => f.write_str(name),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "All" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(s.to_string()))
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Read-only template collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<ContractTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<ContractTemplate>) -> Self {
        Self { templates }
    }

    /// The catalog shipped with the service, built once per process.
    pub fn builtin() -> &'static TemplateCatalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[ContractTemplate] {
        &self.templates
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut categories = vec![CategoryFilter::All];
        for template in &self.templates {
            let candidate = CategoryFilter::Category(template.category.clone());
            if !categories.contains(&candidate) {
                categories.push(candidate);
            }
        }
        categories
    }

    /// Templates in the selected category, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&ContractTemplate> {
        self.templates.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn find(&self, id: &TemplateId) -> Option<&ContractTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn template(id: usize, category: &str) -> ContractTemplate {
        ContractTemplate {
            id: TemplateId::new(format!("t{}", id)).unwrap(),
            title: format!("Template {}", id),
            category: category.to_string(),
            description: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn builtin_ships_three_templates() {
        let catalog = TemplateCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert_eq!(catalog.all()[0].title, "Standard Employment Agreement (India)");
    }

    #[test]
    fn builtin_categories_start_with_all() {
        let labels: Vec<String> = TemplateCatalog::builtin()
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Employment", "Services", "Lease"]);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let catalog = TemplateCatalog::builtin();
        let lease = catalog.filter(&"Lease".parse().unwrap());
        assert_eq!(lease.len(), 1);
        assert_eq!(lease[0].id.as_str(), "t3");
        assert!(catalog.filter(&"lease".parse().unwrap()).is_empty());
    }

    #[test]
    fn find_by_id() {
        let catalog = TemplateCatalog::builtin();
        let id = TemplateId::new("t2").unwrap();
        assert_eq!(catalog.find(&id).map(|t| t.category.as_str()), Some("Services"));
        assert!(catalog.find(&TemplateId::new("t9").unwrap()).is_none());
    }

    #[test]
    fn duplicate_categories_listed_once() {
        let catalog = TemplateCatalog::new(vec![
            template(1, "Lease"),
            template(2, "Employment"),
            template(3, "Lease"),
        ]);
        let labels: Vec<String> = catalog.categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["All", "Lease", "Employment"]);
    }

    proptest! {
        #[test]
        fn all_filter_is_identity(categories in proptest::collection::vec("[A-C]", 0..15)) {
            let catalog = TemplateCatalog::new(
                categories.iter().enumerate().map(|(i, c)| template(i, c)).collect(),
            );
            let all = catalog.filter(&CategoryFilter::All);
            let expected: Vec<&ContractTemplate> = catalog.all().iter().collect();
            prop_assert_eq!(all, expected);
        }

        #[test]
        fn category_filter_is_exact_and_ordered(
            categories in proptest::collection::vec("[A-C]", 0..15),
            wanted in "[A-C]",
        ) {
            let catalog = TemplateCatalog::new(
                categories.iter().enumerate().map(|(i, c)| template(i, c)).collect(),
            );
            let filtered = catalog.filter(&CategoryFilter::Category(wanted.clone()));
            let expected: Vec<&ContractTemplate> =
                catalog.all().iter().filter(|t| t.category == wanted).collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
