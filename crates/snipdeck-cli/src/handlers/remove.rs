//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_snippet_table;
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the snippet and asks for confirmation unless `force` is set.
/// Only the author or an admin may delete; the check happens in the core
/// before anything is removed.
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    if !force {
        let snippet = ctx.app().snippets().get(id).await.map_err(CliError::from)?;
        print_snippet_table(std::slice::from_ref(&snippet));
        println!();

        if !input::prompt_confirmation("Are you sure you want to remove this snippet?")? {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    let removed = ctx
        .app()
        .snippets()
        .delete(ctx.auth(), id)
        .await
        .map_err(CliError::from)?;

    println!("Removed snippet '{}' (ID {})", removed.name, removed.id);
    Ok(())
}
