//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and the pure
//! pipeline and query functions. They don't know about concrete
//! implementations.

mod app_core;
mod catalog_service;
mod guards;
mod snippet_service;

pub use app_core::AppCore;
pub use catalog_service::{CatalogService, DEFAULT_CATEGORY_COLOR};
pub use snippet_service::SnippetService;
