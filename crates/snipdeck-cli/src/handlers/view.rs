//! View command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the view command.
///
/// Prints the public (locked-down) sandbox manifest as JSON, then the
/// public view URL. With `url_only`, prints just the URL.
pub async fn execute(ctx: &CliContext, id: &str, url_only: bool) -> Result<()> {
    let snippets = ctx.app().snippets();
    let snippet = snippets.get(id).await.map_err(CliError::from)?;
    let url = snippets.view_url(&snippet);

    if url_only {
        println!("{url}");
        return Ok(());
    }

    let manifest = snippets.view(id).await.map_err(CliError::from)?;
    println!("{}", manifest.to_json()?);
    println!();
    println!("Public URL: {url}");
    Ok(())
}
