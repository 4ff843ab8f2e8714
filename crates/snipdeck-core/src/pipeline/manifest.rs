//! Sandbox manifest assembly.
//!
//! A manifest is the complete, serializable description of the isolated
//! browser runtime that renders one snippet: template, virtual files,
//! pinned dependencies, and display chrome. Assembly is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::settings::Settings;

/// Virtual path holding the snippet source.
pub const ENTRY_FILE: &str = "/App.js";

/// Virtual path holding the generated bootstrap.
pub const BOOTSTRAP_FILE: &str = "/index.js";

const CSS_URL_PLACEHOLDER: &str = "__CSS_FRAMEWORK_URL__";

/// Bootstrap that loads the CSS framework once, then mounts the default
/// export into `#root`. Load failures fall through to an unstyled render.
const BOOTSTRAP_TEMPLATE: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';

const CSS_FRAMEWORK_URL = __CSS_FRAMEWORK_URL__;

const loadCssFramework = () =>
  new Promise((resolve) => {
    if (document.querySelector(`script[src="${CSS_FRAMEWORK_URL}"]`)) {
      resolve();
      return;
    }
    const script = document.createElement('script');
    script.src = CSS_FRAMEWORK_URL;
    script.async = true;
    script.onload = () => resolve();
    script.onerror = () => resolve();
    document.head.appendChild(script);
  });

loadCssFramework().then(() => {
  const root = ReactDOM.createRoot(document.getElementById('root'));
  root.render(React.createElement(App));
});
"#;

/// Sandbox layout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    Preview,
    Editor,
    Split,
}

/// Display chrome of the sandbox runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayFlags {
    pub show_navigator: bool,
    pub show_tabs: bool,
    pub show_line_numbers: bool,
    pub show_inline_errors: bool,
    pub show_editor: bool,
    pub editor_height: u32,
    pub editor_width_percentage: u8,
    pub wrap_content: bool,
    pub closable_tabs: bool,
    pub show_refresh_button: bool,
    pub layout: Layout,
    /// Stretch the preview to the full viewport.
    pub full_viewport: bool,
}

impl DisplayFlags {
    /// Chrome used for public view pages: only the rendered preview.
    pub const fn locked_down() -> Self {
        Self {
            show_navigator: false,
            show_tabs: false,
            show_line_numbers: false,
            show_inline_errors: true,
            show_editor: false,
            editor_height: 0,
            editor_width_percentage: 0,
            wrap_content: true,
            closable_tabs: false,
            show_refresh_button: false,
            layout: Layout::Preview,
            full_viewport: true,
        }
    }

    /// Chrome with a visible editor next to the preview.
    pub const fn with_editor() -> Self {
        Self {
            show_tabs: true,
            show_line_numbers: true,
            show_editor: true,
            editor_height: 400,
            editor_width_percentage: 50,
            layout: Layout::Split,
            full_viewport: false,
            ..Self::locked_down()
        }
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::locked_down()
    }
}

/// One file in the sandbox's virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualFile {
    pub code: String,
    /// Hidden from the runtime's file tabs.
    pub hidden: bool,
}

/// Inputs to manifest assembly other than the snippet itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    pub template: String,
    pub theme: String,
    pub css_framework_url: String,
    /// Semver range for `react` and `react-dom`; always wins over `dependencies`.
    pub react_version: String,
    /// Extra packages available to the snippet.
    pub dependencies: BTreeMap<String, String>,
    pub display: DisplayFlags,
}

impl ManifestOptions {
    /// Options derived from settings, with locked-down display chrome.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            template: settings.effective_sandbox_template().to_string(),
            theme: settings.effective_sandbox_theme().to_string(),
            css_framework_url: settings.effective_css_framework_url().to_string(),
            react_version: settings.effective_react_version().to_string(),
            dependencies: settings.effective_extra_dependencies(),
            display: DisplayFlags::locked_down(),
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayFlags) -> Self {
        self.display = display;
        self
    }
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::with_defaults())
    }
}

/// Complete configuration handed to the sandbox runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxManifest {
    pub template: String,
    pub theme: String,
    pub files: BTreeMap<String, VirtualFile>,
    pub dependencies: BTreeMap<String, String>,
    pub display: DisplayFlags,
}

impl SandboxManifest {
    /// Source of the entry file.
    pub fn entry_code(&self) -> Option<&str> {
        self.files.get(ENTRY_FILE).map(|f| f.code.as_str())
    }

    /// Pretty JSON for handoff to the runtime.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn bootstrap_source(css_framework_url: &str) -> String {
    // A JSON string is a valid JS string literal, so quoting stays correct.
    let literal = serde_json::Value::String(css_framework_url.to_string()).to_string();
    BOOTSTRAP_TEMPLATE.replace(CSS_URL_PLACEHOLDER, &literal)
}

/// Assemble the manifest for already-normalized snippet source.
pub fn build_manifest(normalized_code: &str, options: &ManifestOptions) -> SandboxManifest {
    let files = BTreeMap::from([
        (
            ENTRY_FILE.to_string(),
            VirtualFile {
                code: normalized_code.to_string(),
                hidden: false,
            },
        ),
        (
            BOOTSTRAP_FILE.to_string(),
            VirtualFile {
                code: bootstrap_source(&options.css_framework_url),
                hidden: true,
            },
        ),
    ]);

    let mut dependencies = options.dependencies.clone();
    for runtime in ["react", "react-dom"] {
        dependencies.insert(runtime.to_string(), options.react_version.clone());
    }

    SandboxManifest {
        template: options.template.clone(),
        theme: options.theme.clone(),
        files,
        dependencies,
        display: options.display.clone(),
    }
}

/// Assemble the manifest served on public view pages.
///
/// Display chrome is always [`DisplayFlags::locked_down`], whatever `options`
/// asks for.
pub fn build_public_manifest(normalized_code: &str, options: &ManifestOptions) -> SandboxManifest {
    let mut manifest = build_manifest(normalized_code, options);
    manifest.display = DisplayFlags::locked_down();
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "function Foo() { return null; }\n\nexport default Foo;";

    #[test]
    fn test_files_and_defaults() {
        let manifest = build_manifest(CODE, &ManifestOptions::default());
        assert_eq!(manifest.template, "react");
        assert_eq!(manifest.theme, "light");
        assert_eq!(manifest.entry_code(), Some(CODE));

        let bootstrap = &manifest.files[BOOTSTRAP_FILE];
        assert!(bootstrap.hidden);
        assert!(bootstrap.code.contains(r#""https://cdn.tailwindcss.com""#));
        assert!(bootstrap.code.contains("script.onerror = () => resolve();"));
        assert!(bootstrap.code.contains("getElementById('root')"));
        assert!(!bootstrap.code.contains(CSS_URL_PLACEHOLDER));
    }

    #[test]
    fn test_dependencies_pinned() {
        let manifest = build_manifest(CODE, &ManifestOptions::default());
        assert_eq!(manifest.dependencies["react"], "^18.2.0");
        assert_eq!(manifest.dependencies["react-dom"], "^18.2.0");
        assert_eq!(manifest.dependencies["lucide-react"], "^0.294.0");
    }

    #[test]
    fn test_runtime_pin_wins_over_extra() {
        let mut options = ManifestOptions::default();
        options
            .dependencies
            .insert("react".to_string(), "^17.0.0".to_string());
        let manifest = build_manifest(CODE, &options);
        assert_eq!(manifest.dependencies["react"], "^18.2.0");
    }

    #[test]
    fn test_deterministic() {
        let options = ManifestOptions::default();
        let a = build_manifest(CODE, &options).to_json().unwrap();
        let b = build_manifest(CODE, &options).to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_public_manifest_is_locked_down() {
        let options = ManifestOptions::default().with_display(DisplayFlags::with_editor());
        assert!(build_manifest(CODE, &options).display.show_editor);

        let public = build_public_manifest(CODE, &options);
        assert_eq!(public.display, DisplayFlags::locked_down());
        assert_eq!(public.display.layout, Layout::Preview);
        assert_eq!(public.display.editor_width_percentage, 0);
        assert!(public.display.show_inline_errors);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = build_public_manifest(CODE, &ManifestOptions::default())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"]["showNavigator"], false);
        assert_eq!(value["display"]["editorWidthPercentage"], 0);
        assert_eq!(value["display"]["layout"], "preview");
        assert_eq!(value["files"]["/App.js"]["code"], CODE);
    }

    #[test]
    fn test_css_url_is_quoted_safely() {
        let options = ManifestOptions {
            css_framework_url: "https://cdn.example.com/a\"b.js".to_string(),
            ..ManifestOptions::default()
        };
        let manifest = build_manifest(CODE, &options);
        assert!(manifest.files[BOOTSTRAP_FILE]
            .code
            .contains(r#""https://cdn.example.com/a\"b.js""#));
    }
}
