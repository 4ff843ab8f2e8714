//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call AppCore methods
//!   3. Format output for the terminal
//!
//! `validate` and `normalize` are pure and run without a context.
//!
//! Handlers should NOT:
//! - Access repositories directly
//! - Contain business logic
//! - Manage database connections

pub mod add;
pub mod category;
pub mod filters;
pub mod list;
pub mod normalize;
pub mod remove;
pub mod show;
pub mod tag;
pub mod update;
pub mod validate;
pub mod view;
