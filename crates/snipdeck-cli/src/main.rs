//! CLI entry point.
//!
//! Parses arguments, wires the context via bootstrap and routes each
//! command to its handler. Errors are printed once here and mapped to an
//! exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use snipdeck_core::FilterSpec;
use tracing_subscriber::EnvFilter;

use snipdeck_cli::handlers::{add::AddArgs, update::UpdateArgs};
use snipdeck_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Pure commands never touch the database
    match command {
        Commands::Validate { source } => handlers::validate::execute(&source),
        Commands::Normalize { source, manifest } => {
            handlers::normalize::execute(&source, manifest, &config.effective_settings())
        }
        command => {
            // Bootstrap the CLI context (composition root)
            let ctx = bootstrap(config).await?;
            dispatch(&ctx, command).await
        }
    }
}

async fn dispatch(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        // Handled in `run` without a context
        Commands::Validate { .. } | Commands::Normalize { .. } => Ok(()),
        Commands::Add {
            name,
            file,
            description,
            category,
            tags,
        } => {
            let args = AddArgs {
                name,
                file,
                description,
                category,
                tags,
            };
            handlers::add::execute(ctx, args).await
        }
        Commands::List {
            search,
            categories,
            tags,
            authors,
            sort_by,
            direction,
            json,
        } => {
            let spec = FilterSpec {
                search,
                categories: categories.into_iter().collect(),
                tags: tags.into_iter().collect(),
                authors: authors.into_iter().collect(),
                sort_by,
                sort_direction: direction,
            };
            handlers::list::execute(ctx, &spec, json).await
        }
        Commands::Filters => handlers::filters::execute(ctx).await,
        Commands::Show { id } => handlers::show::execute(ctx, &id).await,
        Commands::View { id, url_only } => handlers::view::execute(ctx, &id, url_only).await,
        Commands::Update {
            id,
            name,
            description,
            clear_description,
            file,
            category,
            clear_category,
            tags,
            clear_tags,
        } => {
            let args = UpdateArgs {
                name,
                description,
                clear_description,
                file,
                category,
                clear_category,
                tags,
                clear_tags,
            };
            handlers::update::execute(ctx, &id, args).await
        }
        Commands::Remove { id, force } => handlers::remove::execute(ctx, &id, force).await,
        Commands::Category(command) => handlers::category::execute(ctx, command).await,
        Commands::Tag(command) => handlers::tag::execute(ctx, command).await,
    }
}
