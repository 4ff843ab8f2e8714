//! Canonicalization of accepted snippet source.
//!
//! Normalization repairs a known truncation artifact and makes sure the
//! module has a default export the sandbox bootstrap can mount. It is total
//! and idempotent: `normalize(normalize(x)) == normalize(x)`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

use super::patterns::{
    CONST_COMPONENT, DEFAULT_EXPORT, DEFAULT_EXPORTED_FUNCTION, NAMED_FUNCTION,
    TRUNCATED_FUNCTION_PREFIX,
};

/// Entry symbol used when no declaration can be found.
pub const FALLBACK_ENTRY_SYMBOL: &str = "App";

/// Which pattern produced an inferred entry symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrySource {
    /// `function Name(`
    FunctionDeclaration,
    /// `const Name = ...` bound to a component-shaped value
    ConstBinding,
    /// `export default function Name`
    DefaultExportedFunction,
    /// Nothing matched; [`FALLBACK_ENTRY_SYMBOL`] was used.
    Fallback,
}

/// The symbol chosen as the module's default export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySymbol {
    pub name: String,
    pub source: EntrySource,
}

impl EntrySymbol {
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, EntrySource::Fallback)
    }
}

/// Normalized source together with what normalization did to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSource {
    pub code: String,
    /// Whether the truncated `unction` prefix was repaired.
    pub repaired: bool,
    /// The symbol appended as default export, if one was appended.
    pub appended_export: Option<EntrySymbol>,
}

/// Entry-symbol inference table, evaluated in order; first match wins.
static ENTRY_PATTERNS: LazyLock<[(EntrySource, &'static Regex); 3]> = LazyLock::new(|| {
    [
        (EntrySource::FunctionDeclaration, &*NAMED_FUNCTION),
        (EntrySource::ConstBinding, &*CONST_COMPONENT),
        (EntrySource::DefaultExportedFunction, &*DEFAULT_EXPORTED_FUNCTION),
    ]
});

/// Guess the name of the component a module defines.
///
/// Never fails: when no pattern matches, returns [`FALLBACK_ENTRY_SYMBOL`].
pub fn infer_entry_symbol(code: &str) -> EntrySymbol {
    ENTRY_PATTERNS
        .iter()
        .find_map(|(source, regex)| {
            regex.captures(code).and_then(|caps| caps.get(1)).map(|m| EntrySymbol {
                name: m.as_str().to_string(),
                source: *source,
            })
        })
        .unwrap_or_else(|| EntrySymbol {
            name: FALLBACK_ENTRY_SYMBOL.to_string(),
            source: EntrySource::Fallback,
        })
}

/// Normalize snippet source and report the steps taken.
pub fn normalize_detailed(code: &str) -> NormalizedSource {
    let mut text = code.trim().to_string();

    let repaired = text.starts_with(TRUNCATED_FUNCTION_PREFIX);
    if repaired {
        text.insert(0, 'f');
    }

    let appended_export = if DEFAULT_EXPORT.is_match(&text) {
        None
    } else {
        let entry = infer_entry_symbol(&text);
        if entry.is_fallback() {
            warn!(
                fallback = FALLBACK_ENTRY_SYMBOL,
                "No component declaration found; default export may not resolve"
            );
        }
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str("export default ");
        text.push_str(&entry.name);
        text.push(';');
        Some(entry)
    };

    NormalizedSource {
        code: text,
        repaired,
        appended_export,
    }
}

/// Normalize snippet source into its canonical stored form.
pub fn normalize(code: &str) -> String {
    normalize_detailed(code).code
}
