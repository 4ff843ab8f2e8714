//! Core domain types, the snippet ingestion pipeline, and port definitions.
//!
//! `snipdeck-core` holds everything that has real logic in snipdeck:
//!
//! - [`pipeline`] - validator, normalizer and sandbox manifest builder
//! - [`query`] - the gallery filter/sort engine
//! - [`services`] - orchestration over the store ports
//! - [`ports`] - the store traits adapters implement
//!
//! Storage, authentication and the sandbox runtime itself live outside this
//! crate and are reached only through [`ports`] and plain values such as
//! [`AuthContext`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod pipeline;
pub mod ports;
pub mod query;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AuthContext, Category, CategoryUpdate, NewCategory, NewSnippet, NewTag, Snippet,
    SnippetDraft, SnippetPatch, SnippetUpdate, Tag, UNKNOWN_AUTHOR,
};
pub use pipeline::{
    DisplayFlags, EntrySource, EntrySymbol, Layout, ManifestOptions, NormalizedSource,
    RejectReason, SandboxManifest, SensitivePattern, ValidationReport, Verdict, VirtualFile,
    build_manifest, build_public_manifest, infer_entry_symbol, normalize, normalize_detailed,
    validate,
};
pub use ports::{
    CategoryRepository, CoreError, RepositoryError, Repos, SnippetRepository, TagRepository,
};
pub use query::{FilterOptions, FilterSpec, SortBy, SortDirection, query, resolve_tags};
pub use services::{AppCore, CatalogService, SnippetService};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};
