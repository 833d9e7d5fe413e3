//! Template library handlers.
//!
//! The catalog is static, so these handlers are synchronous.

mod get_template;
mod list_templates;

pub use get_template::{GetTemplateHandler, GetTemplateQuery};
pub use list_templates::{ListTemplatesHandler, ListTemplatesQuery, ListTemplatesResult};
