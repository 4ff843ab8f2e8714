//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! global option can also come from the environment (or a `.env` file).

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the snippet gallery.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "snipdeck")]
#[command(about = "Validate, store and preview UI component snippets")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", env = "SNIPDECK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Identity (usually an email) to act as
    #[arg(long, env = "SNIPDECK_USER", global = true)]
    pub user: Option<String>,

    /// Comma-separated emails that carry admin privilege
    #[arg(
        long = "admin-emails",
        env = "SNIPDECK_ADMIN_EMAILS",
        value_delimiter = ',',
        global = true
    )]
    pub admin_emails: Vec<String>,

    /// Email domain whose users carry admin privilege
    #[arg(long = "admin-domain", env = "SNIPDECK_ADMIN_DOMAIN", global = true)]
    pub admin_domain: Option<String>,

    /// Base URL used for public view links
    #[arg(long = "base-url", env = "SNIPDECK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "snipdeck",
            "--verbose",
            "--data-dir",
            "/tmp/snipdeck",
            "--user",
            "dana@example.com",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/snipdeck")));
        assert_eq!(cli.user.as_deref(), Some("dana@example.com"));
        assert_eq!(cli.default_log_level(), "debug");
    }

    #[test]
    fn test_admin_emails_split_on_commas() {
        let cli = Cli::parse_from([
            "snipdeck",
            "--admin-emails",
            "a@example.com,b@example.com",
            "list",
        ]);
        assert_eq!(cli.admin_emails, ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["snipdeck", "list", "--base-url", "https://snips.dev"]);
        assert_eq!(cli.base_url.as_deref(), Some("https://snips.dev"));
    }
}
