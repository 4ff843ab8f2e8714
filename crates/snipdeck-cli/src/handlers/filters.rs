//! Filters command handler.
//!
//! Shows the values that `list` filters can take, resolved to names where
//! the category or tag still exists.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the filters command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let options = ctx
        .app()
        .snippets()
        .filter_options()
        .await
        .map_err(CliError::from)?;
    let categories = ctx
        .app()
        .catalog()
        .list_categories()
        .await
        .map_err(CliError::from)?;
    let tags = ctx.app().catalog().list_tags().await.map_err(CliError::from)?;

    println!("Authors:");
    for author in &options.authors {
        println!("  {author}");
    }

    println!("Categories:");
    for id in &options.category_ids {
        match categories.iter().find(|c| &c.id == id) {
            Some(category) => println!("  {id}  {}", category.name),
            None => println!("  {id}  (deleted)"),
        }
    }

    println!("Tags:");
    for id in &options.tag_ids {
        match tags.iter().find(|t| &t.id == id) {
            Some(tag) => println!("  {id}  {}", tag.name),
            None => println!("  {id}  (deleted)"),
        }
    }
    Ok(())
}
