//! Pre-storage structural check for submitted snippet source.
//!
//! The checks run in a fixed order and stop at the first failure. They are
//! cheap text heuristics: a snippet that passes is not guaranteed to run,
//! only to look like a component module.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::patterns::{
    ARROW_MARKER, CONST_KEYWORD, DEFAULT_EXPORT, EXPORT_KEYWORD, FUNCTION_KEYWORD,
    SENSITIVE_API_REGEXES,
};

/// Largest tolerated difference between opening and closing brace counts.
///
/// Braces inside strings, comments, and template literals are counted too.
pub const MAX_BRACE_IMBALANCE: usize = 2;

/// Why a snippet was refused. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RejectReason {
    #[error("code must not be empty")]
    Empty,

    #[error("no component definition found")]
    NoComponentDefinition,

    #[error("unbalanced braces")]
    UnbalancedBraces { open: usize, close: usize },
}

/// Categories of browser API usage that are reported but never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensitivePattern {
    /// `eval(...)`
    DynamicEval,
    /// `new Function(...)`
    FunctionConstructor,
    /// `setTimeout` / `setInterval`
    Timer,
    /// `document.cookie`
    CookieAccess,
    /// `localStorage` / `sessionStorage`
    StorageAccess,
    /// `fetch`, `XMLHttpRequest`, sockets
    NetworkCall,
}

impl SensitivePattern {
    /// Short label used in logs and CLI output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::DynamicEval => "dynamic-eval",
            Self::FunctionConstructor => "function-constructor",
            Self::Timer => "timer",
            Self::CookieAccess => "cookie-access",
            Self::StorageAccess => "storage-access",
            Self::NetworkCall => "network-call",
        }
    }
}

impl std::fmt::Display for SensitivePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a structural check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "camelCase")]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

/// Verdict plus the non-fatal sensitive-API findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub verdict: Verdict,
    /// Distinct sensitive patterns found, in sorted order.
    pub flagged: Vec<SensitivePattern>,
}

impl ValidationReport {
    pub const fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }

    /// The rejection reason, if any.
    pub const fn rejection(&self) -> Option<&RejectReason> {
        match &self.verdict {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(reason),
        }
    }

    /// Convert into a `Result`, discarding the flagged list.
    pub fn into_result(self) -> Result<(), RejectReason> {
        match self.verdict {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(reason) => Err(reason),
        }
    }
}

/// Run the structural checks against raw snippet source.
pub fn validate(code: &str) -> ValidationReport {
    let flagged = scan_sensitive(code);
    if !flagged.is_empty() {
        debug!(patterns = ?flagged, "Snippet uses sensitive browser APIs");
    }

    let verdict = match check_structure(code) {
        Ok(()) => Verdict::Accepted,
        Err(reason) => {
            debug!(%reason, "Snippet rejected");
            Verdict::Rejected(reason)
        }
    };

    ValidationReport { verdict, flagged }
}

fn check_structure(code: &str) -> Result<(), RejectReason> {
    if code.trim().is_empty() {
        return Err(RejectReason::Empty);
    }

    let has_function = FUNCTION_KEYWORD.is_match(code);
    let has_const = CONST_KEYWORD.is_match(code);

    let has_any_marker =
        has_function || has_const || code.contains(ARROW_MARKER) || EXPORT_KEYWORD.is_match(code);
    if !has_any_marker {
        return Err(RejectReason::NoComponentDefinition);
    }

    if !(DEFAULT_EXPORT.is_match(code) || has_function || has_const) {
        return Err(RejectReason::NoComponentDefinition);
    }

    let open = code.matches('{').count();
    let close = code.matches('}').count();
    if open.abs_diff(close) > MAX_BRACE_IMBALANCE {
        return Err(RejectReason::UnbalancedBraces { open, close });
    }

    Ok(())
}

fn scan_sensitive(code: &str) -> Vec<SensitivePattern> {
    let mut found: Vec<SensitivePattern> = SENSITIVE_API_REGEXES
        .iter()
        .filter(|(_, regex)| regex.is_match(code))
        .map(|(kind, _)| *kind)
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}
