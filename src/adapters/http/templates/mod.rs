//! HTTP adapter for the template library.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListTemplatesParams, TemplateListResponse};
pub use handlers::TemplatesAppState;
pub use routes::template_routes;
