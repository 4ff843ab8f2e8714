//! Pattern constants for snippet source analysis.
//!
//! These patterns are shared by the validator and the normalizer. They are
//! textual heuristics, not a grammar: nothing here builds a syntax tree.

use regex::Regex;
use std::sync::LazyLock;

use super::validator::SensitivePattern;

/// JavaScript identifier, including `$`-prefixed names.
const IDENT: &str = r"[A-Za-z_$][\w$]*";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// `function` declaration keyword.
pub static FUNCTION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bfunction\b"));

/// `const` binding keyword.
pub static CONST_KEYWORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bconst\b"));

/// Any module-export keyword (`export`, `export default`, `export const`...).
pub static EXPORT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\bexport\b"));

/// An explicit default-export statement.
pub static DEFAULT_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\bexport\s+default\b"));

/// Arrow-function marker.
pub const ARROW_MARKER: &str = "=>";

/// Truncation artifact: a function declaration whose leading `f` was dropped.
pub const TRUNCATED_FUNCTION_PREFIX: &str = "unction ";

/// `function Name(` or `function Name<T>(`.
pub static NAMED_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\bfunction\s+({IDENT})\s*[(<]")));

/// `const Name =` bound to an arrow function, a function expression, or a
/// memoization / ref-forwarding wrapper call.
pub static CONST_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\bconst\s+({IDENT})\s*=\s*(?:\(|async\b|function\b|{IDENT}\s*=>|(?:React\.)?(?:memo|forwardRef)\s*[(<])"
    ))
});

/// `export default function Name`.
pub static DEFAULT_EXPORTED_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\bexport\s+default\s+function\s+({IDENT})")));

/// Sensitive browser APIs worth flagging. Matches never reject a snippet.
/// Format: (pattern kind, regex source)
pub const SENSITIVE_API_PATTERNS: &[(SensitivePattern, &str)] = &[
    (SensitivePattern::DynamicEval, r"\beval\s*\("),
    (SensitivePattern::FunctionConstructor, r"\bnew\s+Function\s*\("),
    (SensitivePattern::Timer, r"\bset(?:Timeout|Interval)\s*\("),
    (SensitivePattern::CookieAccess, r"\bdocument\s*\.\s*cookie\b"),
    (SensitivePattern::StorageAccess, r"\b(?:localStorage|sessionStorage)\b"),
    (SensitivePattern::NetworkCall, r"\bfetch\s*\("),
    (SensitivePattern::NetworkCall, r"\b(?:XMLHttpRequest|WebSocket|EventSource)\b"),
];

/// Compiled form of [`SENSITIVE_API_PATTERNS`].
pub static SENSITIVE_API_REGEXES: LazyLock<Vec<(SensitivePattern, Regex)>> =
    LazyLock::new(|| {
        SENSITIVE_API_PATTERNS
            .iter()
            .map(|(kind, pattern)| (*kind, compile(pattern)))
            .collect()
    });
