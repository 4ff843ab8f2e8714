//! Authorization capability supplied by the auth collaborator.
//!
//! The core never decides who is an admin. The adapter computes `is_admin`
//! once per request and passes the whole context into every service call.

use serde::{Deserialize, Serialize};

use super::Snippet;

/// Caller identity and privilege, as resolved outside the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    /// Email or display name of the signed-in user, if any.
    pub identity: Option<String>,
    /// Whether the identity carries admin privilege.
    pub is_admin: bool,
}

impl AuthContext {
    /// A caller that is not signed in.
    pub const fn anonymous() -> Self {
        Self {
            identity: None,
            is_admin: false,
        }
    }

    /// A signed-in caller without admin privilege.
    pub fn user(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            is_admin: false,
        }
    }

    /// A signed-in caller with admin privilege.
    pub fn admin(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            is_admin: true,
        }
    }

    /// The signed-in identity, ignoring blank values.
    pub fn identity(&self) -> Option<&str> {
        self.identity
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Edit/delete is permitted iff admin or the snippet's author.
    pub fn can_modify(&self, snippet: &Snippet) -> bool {
        self.is_admin || self.identity().is_some_and(|id| snippet.is_authored_by(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn snippet_by(author: &str) -> Snippet {
        Snippet {
            id: "s1".to_string(),
            name: "Widget".to_string(),
            description: None,
            code: "function Widget() {}".to_string(),
            author: author.to_string(),
            category: None,
            tags: BTreeSet::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_author_can_modify() {
        let snippet = snippet_by("dana@example.com");
        assert!(AuthContext::user("dana@example.com").can_modify(&snippet));
        assert!(!AuthContext::user("eli@example.com").can_modify(&snippet));
    }

    #[test]
    fn test_admin_can_modify_anything() {
        let snippet = snippet_by("dana@example.com");
        assert!(AuthContext::admin("root@example.com").can_modify(&snippet));
    }

    #[test]
    fn test_anonymous_cannot_modify_unknown_author() {
        let snippet = snippet_by("Unknown");
        assert!(!AuthContext::anonymous().can_modify(&snippet));
        let blank = AuthContext {
            identity: Some("   ".to_string()),
            is_admin: false,
        };
        assert!(blank.identity().is_none());
    }
}
