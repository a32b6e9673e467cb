//! Authorization for destructive endpoints.
//!
//! The reset endpoint is gated by a capability check rather than a
//! hard-coded string comparison, so deployments can swap in a real policy.
//! The default implementation preserves the historical behavior: a static
//! sentinel header set by the admin dashboard. It is a tripwire, not
//! authentication.

use axum::http::HeaderMap;

pub const ADMIN_HEADER: &str = "x-carecore-admin";

const ADMIN_SENTINEL: &str = "true";

/// Capabilities a caller may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ResetAccessEvents,
}

/// Decides whether a request carries a given capability.
#[cfg_attr(test, mockall::automock)]
pub trait Authorizer: Send + Sync {
    fn allows(&self, headers: &HeaderMap, capability: Capability) -> bool;
}

/// Grants `ResetAccessEvents` when the admin sentinel header matches exactly.
#[derive(Debug, Clone)]
pub struct AdminHeaderAuthorizer {
    sentinel: String,
}

impl Default for AdminHeaderAuthorizer {
    fn default() -> Self {
        Self {
            sentinel: ADMIN_SENTINEL.to_string(),
        }
    }
}

impl Authorizer for AdminHeaderAuthorizer {
    fn allows(&self, headers: &HeaderMap, capability: Capability) -> bool {
        match capability {
            Capability::ResetAccessEvents => headers
                .get(ADMIN_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == self.sentinel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn grants_reset_when_sentinel_matches() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_HEADER, HeaderValue::from_static("true"));
        let authorizer = AdminHeaderAuthorizer::default();
        assert!(authorizer.allows(&headers, Capability::ResetAccessEvents));
    }

    #[test]
    fn denies_reset_without_header() {
        let authorizer = AdminHeaderAuthorizer::default();
        assert!(!authorizer.allows(&HeaderMap::new(), Capability::ResetAccessEvents));
    }

    #[test]
    fn denies_reset_on_sentinel_mismatch() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_HEADER, HeaderValue::from_static("TRUE"));
        let authorizer = AdminHeaderAuthorizer::default();
        assert!(!authorizer.allows(&headers, Capability::ResetAccessEvents));
    }
}
