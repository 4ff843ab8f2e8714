//! Add command handler.

use std::path::PathBuf;

use anyhow::Result;
use snipdeck_core::SnippetDraft;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::source::read_source;

/// Arguments for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub name: String,
    pub file: Option<PathBuf>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Execute the add command.
///
/// The code is read from `file` (stdin when absent), then validated,
/// normalized and stored with the caller as author.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let code = read_source(args.file.as_deref())?;
    let draft = SnippetDraft {
        name: args.name,
        description: args.description,
        code,
        category: args.category,
        tags: args.tags,
    };

    let snippet = ctx
        .app()
        .snippets()
        .submit(ctx.auth(), draft)
        .await
        .map_err(CliError::from)?;

    println!("Added snippet '{}' (ID {})", snippet.name, snippet.id);
    println!("View: {}", ctx.app().snippets().view_url(&snippet));
    Ok(())
}
