//! Show command handler.

use anyhow::Result;
use snipdeck_core::resolve_tags;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_snippet_detail;

/// Execute the show command.
///
/// Prints the snippet followed by the names of its category and of the
/// tags that still exist.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let snippet = ctx.app().snippets().get(id).await.map_err(CliError::from)?;
    let live_tags = ctx.app().catalog().list_tags().await.map_err(CliError::from)?;

    print_snippet_detail(&snippet);
    println!();

    if let Some(ref category_id) = snippet.category {
        match ctx.app().catalog().get_category(category_id).await {
            Ok(category) => println!("Category name: {}", category.name),
            Err(err) if err.is_not_found() => println!("Category name: (deleted)"),
            Err(err) => return Err(CliError::from(err).into()),
        }
    }

    let names = resolve_tags(&snippet, &live_tags)
        .into_iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>();
    if !names.is_empty() {
        println!("Tag names: {}", names.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use snipdeck_core::AuthContext;

    #[tokio::test]
    async fn test_show_missing_snippet() {
        let ctx = context(AuthContext::anonymous()).await;
        let err = execute(&ctx, "nope").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }
}
