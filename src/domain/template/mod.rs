//! Template domain - static catalog of contract templates.

mod catalog;
mod template;

pub use catalog::{CategoryFilter, TemplateCatalog};
pub use template::ContractTemplate;
