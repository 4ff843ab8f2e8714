//! Update command handler.

use std::path::PathBuf;

use anyhow::Result;
use snipdeck_core::SnippetUpdate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::source::read_source;

/// Arguments for the update command.
///
/// `clear_*` flags win over the matching value; clap already rejects
/// passing both.
#[derive(Debug, Clone, Default)]
pub struct UpdateArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub clear_description: bool,
    pub file: Option<PathBuf>,
    pub category: Option<String>,
    pub clear_category: bool,
    pub tags: Vec<String>,
    pub clear_tags: bool,
}

impl UpdateArgs {
    /// Build the partial update, reading replacement code if a file was given.
    pub fn into_update(self) -> Result<SnippetUpdate, CliError> {
        let code = self
            .file
            .as_deref()
            .map(|path| read_source(Some(path)))
            .transpose()?;

        Ok(SnippetUpdate {
            name: self.name,
            description: clearable(self.description, self.clear_description),
            code,
            category: clearable(self.category, self.clear_category),
            tags: if self.clear_tags {
                Some(Vec::new())
            } else if self.tags.is_empty() {
                None
            } else {
                Some(self.tags)
            },
        })
    }
}

fn clearable(value: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear { Some(None) } else { value.map(Some) }
}

/// Execute the update command. Only the author or an admin may edit.
pub async fn execute(ctx: &CliContext, id: &str, args: UpdateArgs) -> Result<()> {
    let update = args.into_update()?;
    let snippet = ctx
        .app()
        .snippets()
        .update(ctx.auth(), id, update)
        .await
        .map_err(CliError::from)?;

    println!("Updated snippet '{}' (ID {})", snippet.name, snippet.id);
    Ok(())
}
