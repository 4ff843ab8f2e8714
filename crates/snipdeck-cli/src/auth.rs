//! Admin resolution for the CLI.
//!
//! The core only ever sees an [`AuthContext`]. Whether an identity is an
//! admin is decided here, once per invocation, from the configured email
//! allow-list and optional domain.

use std::collections::BTreeSet;

use snipdeck_core::AuthContext;

/// Email allow-list plus an optional admin email domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPolicy {
    emails: BTreeSet<String>,
    domain: Option<String>,
}

impl AdminPolicy {
    /// Build a policy. Emails and domain are compared case-insensitively;
    /// blank entries are ignored and a leading `@` on the domain is optional.
    pub fn new<I, S>(emails: I, domain: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        let domain = domain
            .map(|d| d.trim().trim_start_matches('@').to_lowercase())
            .filter(|d| !d.is_empty());
        Self { emails, domain }
    }

    /// Whether `identity` carries admin privilege.
    pub fn is_admin(&self, identity: &str) -> bool {
        let identity = identity.trim().to_lowercase();
        if self.emails.contains(&identity) {
            return true;
        }
        self.domain.as_ref().is_some_and(|domain| {
            identity
                .rsplit_once('@')
                .is_some_and(|(local, host)| !local.is_empty() && host == domain)
        })
    }

    /// Resolve the caller's context. A missing or blank identity is anonymous.
    pub fn authorize(&self, identity: Option<&str>) -> AuthContext {
        match identity.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) if self.is_admin(id) => AuthContext::admin(id),
            Some(id) => AuthContext::user(id),
            None => AuthContext::anonymous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_listed_email_is_admin() {
        let policy = AdminPolicy::new(["Root@Example.com"], None);
        assert!(policy.is_admin("root@example.com"));
        assert!(!policy.is_admin("dana@example.com"));
    }

    #[test]
    fn test_domain_match_is_exact() {
        let policy = AdminPolicy::new(Vec::<String>::new(), Some("@acme.dev"));
        assert!(policy.is_admin("ops@acme.dev"));
        assert!(policy.is_admin("OPS@ACME.DEV"));
        assert!(!policy.is_admin("ops@notacme.dev"));
        assert!(!policy.is_admin("ops@acme.dev.evil.io"));
        assert!(!policy.is_admin("@acme.dev"));
    }

    #[test]
    fn test_authorize() {
        let policy = AdminPolicy::new(["root@example.com", " "], Some("acme.dev"));

        assert_eq!(policy.authorize(None), AuthContext::anonymous());
        assert_eq!(policy.authorize(Some("  ")), AuthContext::anonymous());
        assert_eq!(
            policy.authorize(Some("dana@example.com")),
            AuthContext::user("dana@example.com")
        );
        assert_eq!(
            policy.authorize(Some("root@example.com")),
            AuthContext::admin("root@example.com")
        );
        assert!(policy.authorize(Some("eli@acme.dev")).is_admin);
    }

    #[test]
    fn test_empty_policy_has_no_admins() {
        let policy = AdminPolicy::default();
        assert!(!policy.is_admin("root@example.com"));
    }
}
