//! Tag command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::TagCommand;
use crate::error::CliError;
use crate::presentation::{format_timestamp, print_separator, truncate_string};

/// Execute a tag subcommand.
pub async fn execute(ctx: &CliContext, command: TagCommand) -> Result<()> {
    let catalog = ctx.app().catalog();
    match command {
        TagCommand::List => {
            let tags = catalog.list_tags().await.map_err(CliError::from)?;
            if tags.is_empty() {
                println!("No tags found.");
                return Ok(());
            }
            println!(
                "{:<36} {:<20} {:<24} {:<16}",
                "ID", "Name", "Created by", "Created"
            );
            print_separator(99);
            for tag in tags {
                println!(
                    "{:<36} {:<20} {:<24} {:<16}",
                    tag.id,
                    truncate_string(&tag.name, 19),
                    truncate_string(&tag.created_by, 23),
                    format_timestamp(&tag.created_at),
                );
            }
        }
        TagCommand::Add { name, reuse } => {
            let tag = if reuse {
                catalog.get_or_create_tag(ctx.auth(), &name).await
            } else {
                catalog.create_tag(ctx.auth(), &name).await
            }
            .map_err(CliError::from)?;
            println!("Tag '{}' (ID {})", tag.name, tag.id);
        }
        TagCommand::Remove { id } => {
            catalog
                .delete_tag(ctx.auth(), &id)
                .await
                .map_err(CliError::from)?;
            println!("Removed tag {id}");
        }
    }
    Ok(())
}
