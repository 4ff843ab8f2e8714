//! List command handler.
//!
//! Displays the snippet gallery, filtered and sorted, as a table or JSON.

use anyhow::Result;
use snipdeck_core::FilterSpec;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_snippet_table;

/// Execute the list command.
pub async fn execute(ctx: &CliContext, spec: &FilterSpec, json: bool) -> Result<()> {
    let snippets = ctx
        .app()
        .snippets()
        .browse(spec)
        .await
        .map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snippets)?);
        return Ok(());
    }

    if snippets.is_empty() {
        if spec.is_active() {
            println!("No snippets match the given filters.");
        } else {
            println!("No snippets found.");
            println!("Use 'snipdeck add <name> --file <path>' to add your first snippet.");
        }
        return Ok(());
    }

    println!("Found {} snippet(s):\n", snippets.len());
    print_snippet_table(&snippets);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use snipdeck_core::{AuthContext, SnippetDraft};

    #[tokio::test]
    async fn test_list_with_and_without_filters() {
        let ctx = context(AuthContext::user("dana@example.com")).await;
        let mut draft = SnippetDraft::new("Card", "function Card() { return null }");
        draft.category = Some("c1".to_string());
        ctx.app().snippets().submit(ctx.auth(), draft).await.unwrap();

        execute(&ctx, &FilterSpec::default(), false).await.unwrap();

        let spec = FilterSpec {
            search: Some("nothing like this".to_string()),
            ..FilterSpec::default()
        };
        execute(&ctx, &spec, true).await.unwrap();
    }
}
