//! Category command handlers.

use anyhow::Result;
use snipdeck_core::CategoryUpdate;

use crate::bootstrap::CliContext;
use crate::commands::CategoryCommand;
use crate::error::CliError;
use crate::presentation::{format_timestamp, print_separator, truncate_string};

/// Execute a category subcommand.
pub async fn execute(ctx: &CliContext, command: CategoryCommand) -> Result<()> {
    let catalog = ctx.app().catalog();
    match command {
        CategoryCommand::List => {
            let categories = catalog.list_categories().await.map_err(CliError::from)?;
            if categories.is_empty() {
                println!("No categories found.");
                return Ok(());
            }
            println!(
                "{:<36} {:<20} {:<9} {:<24} {:<16}",
                "ID", "Name", "Color", "Created by", "Created"
            );
            print_separator(109);
            for category in categories {
                println!(
                    "{:<36} {:<20} {:<9} {:<24} {:<16}",
                    category.id,
                    truncate_string(&category.name, 19),
                    category.color,
                    truncate_string(&category.created_by, 23),
                    format_timestamp(&category.created_at),
                );
            }
        }
        CategoryCommand::Add { name, color } => {
            let category = catalog
                .create_category(ctx.auth(), &name, color)
                .await
                .map_err(CliError::from)?;
            println!("Added category '{}' (ID {})", category.name, category.id);
        }
        CategoryCommand::Update { id, name, color } => {
            let category = catalog
                .update_category(ctx.auth(), &id, CategoryUpdate { name, color })
                .await
                .map_err(CliError::from)?;
            println!(
                "Category {} is now '{}' ({})",
                category.id, category.name, category.color
            );
        }
        CategoryCommand::Remove { id } => {
            catalog
                .delete_category(ctx.auth(), &id)
                .await
                .map_err(CliError::from)?;
            println!("Removed category {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use snipdeck_core::AuthContext;

    #[tokio::test]
    async fn test_category_lifecycle() {
        let ctx = context(AuthContext::user("dana@example.com")).await;
        execute(
            &ctx,
            CategoryCommand::Add {
                name: "Forms".to_string(),
                color: None,
            },
        )
        .await
        .unwrap();

        let id = ctx.app().catalog().list_categories().await.unwrap()[0]
            .id
            .clone();
        execute(
            &ctx,
            CategoryCommand::Update {
                id: id.clone(),
                name: None,
                color: Some("#ef4444".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(
            ctx.app().catalog().get_category(&id).await.unwrap().color,
            "#ef4444"
        );

        execute(&ctx, CategoryCommand::List).await.unwrap();
        execute(&ctx, CategoryCommand::Remove { id: id.clone() })
            .await
            .unwrap();

        let err = execute(&ctx, CategoryCommand::Remove { id }).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }
}
