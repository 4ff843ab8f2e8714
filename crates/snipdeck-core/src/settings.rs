//! Settings domain types and validation.
//!
//! Settings cover the public view route and the sandbox runtime defaults.
//! They are pure domain types; adapters decide where the values come from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default origin used to build public view URLs.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:5173";

/// Default CSS utility framework loaded by the sandbox bootstrap.
pub const DEFAULT_CSS_FRAMEWORK_URL: &str = "https://cdn.tailwindcss.com";

/// Default sandbox runtime template.
pub const DEFAULT_SANDBOX_TEMPLATE: &str = "react";

/// Default sandbox theme.
pub const DEFAULT_SANDBOX_THEME: &str = "light";

/// Default semver range for the runtime library and its renderer.
pub const DEFAULT_REACT_VERSION: &str = "^18.2.0";

/// Extra libraries available to every snippet unless overridden.
/// Format: (package name, semver range)
pub const DEFAULT_EXTRA_DEPENDENCIES: &[(&str, &str)] = &[("lucide-react", "^0.294.0")];

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Origin that public view links are built on (no trailing `/view`).
    pub public_base_url: Option<String>,

    /// Stylesheet framework script injected by the sandbox bootstrap.
    pub css_framework_url: Option<String>,

    /// Sandbox runtime template identifier.
    pub sandbox_template: Option<String>,

    /// Sandbox runtime theme.
    pub sandbox_theme: Option<String>,

    /// Semver range pinned for `react` and `react-dom`.
    pub react_version: Option<String>,

    /// Additional packages made available to snippets.
    pub extra_dependencies: Option<BTreeMap<String, String>>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            public_base_url: Some(DEFAULT_PUBLIC_BASE_URL.to_string()),
            css_framework_url: Some(DEFAULT_CSS_FRAMEWORK_URL.to_string()),
            sandbox_template: Some(DEFAULT_SANDBOX_TEMPLATE.to_string()),
            sandbox_theme: Some(DEFAULT_SANDBOX_THEME.to_string()),
            react_version: Some(DEFAULT_REACT_VERSION.to_string()),
            extra_dependencies: Some(default_extra_dependencies()),
        }
    }

    /// Get the effective public base URL, without a trailing slash.
    #[must_use]
    pub fn effective_public_base_url(&self) -> &str {
        self.public_base_url
            .as_deref()
            .unwrap_or(DEFAULT_PUBLIC_BASE_URL)
            .trim_end_matches('/')
    }

    #[must_use]
    pub fn effective_css_framework_url(&self) -> &str {
        self.css_framework_url
            .as_deref()
            .unwrap_or(DEFAULT_CSS_FRAMEWORK_URL)
    }

    #[must_use]
    pub fn effective_sandbox_template(&self) -> &str {
        self.sandbox_template
            .as_deref()
            .unwrap_or(DEFAULT_SANDBOX_TEMPLATE)
    }

    #[must_use]
    pub fn effective_sandbox_theme(&self) -> &str {
        self.sandbox_theme.as_deref().unwrap_or(DEFAULT_SANDBOX_THEME)
    }

    #[must_use]
    pub fn effective_react_version(&self) -> &str {
        self.react_version.as_deref().unwrap_or(DEFAULT_REACT_VERSION)
    }

    /// Get the effective extra dependencies (with default fallback).
    #[must_use]
    pub fn effective_extra_dependencies(&self) -> BTreeMap<String, String> {
        self.extra_dependencies
            .clone()
            .unwrap_or_else(default_extra_dependencies)
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref url) = other.public_base_url {
            self.public_base_url.clone_from(url);
        }
        if let Some(ref url) = other.css_framework_url {
            self.css_framework_url.clone_from(url);
        }
        if let Some(ref template) = other.sandbox_template {
            self.sandbox_template.clone_from(template);
        }
        if let Some(ref theme) = other.sandbox_theme {
            self.sandbox_theme.clone_from(theme);
        }
        if let Some(ref version) = other.react_version {
            self.react_version.clone_from(version);
        }
        if let Some(ref deps) = other.extra_dependencies {
            self.extra_dependencies.clone_from(deps);
        }
    }
}

fn default_extra_dependencies() -> BTreeMap<String, String> {
    DEFAULT_EXTRA_DEPENDENCIES
        .iter()
        .map(|(name, version)| ((*name).to_string(), (*version).to_string()))
        .collect()
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field to its built-in default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub public_base_url: Option<Option<String>>,
    pub css_framework_url: Option<Option<String>>,
    pub sandbox_template: Option<Option<String>>,
    pub sandbox_theme: Option<Option<String>>,
    pub react_version: Option<Option<String>>,
    pub extra_dependencies: Option<Option<BTreeMap<String, String>>>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} must be an http(s) URL, got {value:?}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Dependency {name:?} needs a non-empty version range")]
    InvalidDependency { name: String },
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    for (field, value) in [
        ("public_base_url", &settings.public_base_url),
        ("css_framework_url", &settings.css_framework_url),
    ] {
        if let Some(url) = value {
            if !is_http_url(url) {
                return Err(SettingsError::InvalidUrl {
                    field,
                    value: url.clone(),
                });
            }
        }
    }

    for (field, value) in [
        ("sandbox_template", &settings.sandbox_template),
        ("sandbox_theme", &settings.sandbox_theme),
        ("react_version", &settings.react_version),
    ] {
        if value.as_ref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SettingsError::Empty(field));
        }
    }

    if let Some(ref deps) = settings.extra_dependencies {
        for (name, version) in deps {
            if name.trim().is_empty() {
                return Err(SettingsError::Empty("dependency name"));
            }
            if version.trim().is_empty() {
                return Err(SettingsError::InvalidDependency { name: name.clone() });
            }
        }
    }

    Ok(())
}
