//! Input and permission checks shared by the services.

use std::collections::BTreeSet;

use crate::domain::{AuthContext, Snippet};
use crate::ports::CoreError;

/// The caller's identity, or `PermissionDenied` when not signed in.
pub(super) fn require_identity(auth: &AuthContext, action: &str) -> Result<String, CoreError> {
    auth.identity()
        .map(str::to_string)
        .ok_or_else(|| CoreError::PermissionDenied(format!("sign in to {action}")))
}

/// `PermissionDenied` unless the caller is an admin or the snippet's author.
pub(super) fn require_modify(auth: &AuthContext, snippet: &Snippet) -> Result<(), CoreError> {
    if auth.can_modify(snippet) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(format!(
            "only the author or an admin can modify snippet {}",
            snippet.id
        )))
    }
}

/// Trimmed non-empty name, or a validation error naming `field`.
pub(super) fn required_text(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed value, with blank collapsed to `None`.
pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Tag IDs as a set, dropping blanks and duplicates.
pub(super) fn tag_set(tags: Vec<String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_identity() {
        assert_eq!(
            require_identity(&AuthContext::user("dana"), "submit").unwrap(),
            "dana"
        );
        let err = require_identity(&AuthContext::anonymous(), "submit snippets").unwrap_err();
        assert!(matches!(err, CoreError::PermissionDenied(msg) if msg == "sign in to submit snippets"));
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("  Card ", "name").unwrap(), "Card");
        let err = required_text(" ", "name").unwrap_err();
        assert_eq!(err.user_message(), "name must not be empty");
    }

    #[test]
    fn test_tag_set_dedups() {
        let tags = tag_set(vec!["b".into(), "a".into(), "b".into(), " ".into()]);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), ["a", "b"]);
    }
}
