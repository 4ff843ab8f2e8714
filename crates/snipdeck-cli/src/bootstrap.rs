//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool and repositories (via
//! snipdeck-db), the core services (via snipdeck-core), and the caller's
//! [`AuthContext`] (via [`AdminPolicy`]).
//!
//! Command handlers receive the fully-composed context and delegate work to
//! its `AppCore`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use snipdeck_core::paths::{database_path, database_path_in, normalize_user_path};
use snipdeck_core::{AppCore, AuthContext, Settings, SettingsUpdate};
use snipdeck_db::{CoreFactory, setup_database};
use tracing::debug;

use crate::auth::AdminPolicy;
use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data root override; the platform default is used when `None`.
    pub data_dir: Option<PathBuf>,
    /// Settings overrides layered over the built-in defaults.
    pub settings: SettingsUpdate,
    /// Identity to act as.
    pub identity: Option<String>,
    /// Who counts as an admin.
    pub admin: AdminPolicy,
}

impl CliConfig {
    /// Collect configuration from parsed arguments (which already include
    /// anything supplied through the environment).
    pub fn from_cli(cli: &Cli) -> Self {
        let settings = SettingsUpdate {
            public_base_url: cli.base_url.clone().map(Some),
            ..SettingsUpdate::default()
        };
        Self {
            data_dir: cli.data_dir.clone(),
            settings,
            identity: cli.user.clone(),
            admin: AdminPolicy::new(&cli.admin_emails, cli.admin_domain.as_deref()),
        }
    }

    /// Effective settings: built-in defaults with the overrides applied.
    pub fn effective_settings(&self) -> Settings {
        let mut settings = Settings::with_defaults();
        settings.merge(&self.settings);
        settings
    }

    /// Resolve the database file path, creating its directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        let path = match &self.data_dir {
            Some(dir) => {
                let root = normalize_user_path(&dir.to_string_lossy())?;
                database_path_in(&root)?
            }
            None => database_path()?,
        };
        Ok(path)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// The caller, as resolved by the admin policy.
    pub auth: AuthContext,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the caller's auth context.
    pub const fn auth(&self) -> &AuthContext {
        &self.auth
    }
}

/// Bootstrap the CLI application.
///
/// Opens (and if needed creates) the database, assembles the `AppCore`
/// from the effective settings, and resolves the caller's auth context.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = config.database_path()?;
    let pool = setup_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let app = CoreFactory::build_app_core(pool, &config.effective_settings())
        .map_err(CliError::from)?;

    let auth = config.admin.authorize(config.identity.as_deref());
    debug!(
        db = %db_path.display(),
        identity = auth.identity().unwrap_or("<anonymous>"),
        is_admin = auth.is_admin,
        "CLI context ready"
    );

    Ok(CliContext { app, auth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "snipdeck",
            "--user",
            "root@example.com",
            "--admin-emails",
            "root@example.com",
            "--base-url",
            "https://snips.dev/",
            "list",
        ]);
        let config = CliConfig::from_cli(&cli);

        assert_eq!(
            config.effective_settings().effective_public_base_url(),
            "https://snips.dev"
        );
        assert!(config.admin.authorize(config.identity.as_deref()).is_admin);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_database_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            identity: Some("dana@example.com".to_string()),
            ..CliConfig::default()
        };

        let ctx = bootstrap(config).await.unwrap();
        assert!(dir.path().join("data").join("snipdeck.db").exists());
        assert_eq!(ctx.auth().identity(), Some("dana@example.com"));
        assert!(ctx.app().snippets().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            settings: SettingsUpdate {
                public_base_url: Some(Some("ftp://nope".to_string())),
                ..SettingsUpdate::default()
            },
            ..CliConfig::default()
        };

        let err = bootstrap(config).await.err().unwrap();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::Config(_)));
    }
}
