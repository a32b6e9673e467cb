//! Visitor identification.
//!
//! Every browser that records an access event is tagged with an opaque,
//! stable identifier persisted in a long-lived cookie. The identifier is a
//! correlation handle only and carries no authentication weight.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const VISITOR_COOKIE: &str = "carecore_visitor_id";

const VISITOR_PREFIX: &str = "v_";
const COOKIE_MAX_AGE: time::Duration = time::Duration::days(365);

/// Returns the visitor identifier for the request, minting a new one when
/// the cookie is missing or empty. The boolean signals whether the caller
/// must set the cookie on the response.
#[must_use]
pub fn get_or_create(jar: &CookieJar) -> (String, bool) {
    if let Some(existing) = jar.get(VISITOR_COOKIE) {
        if !existing.value().is_empty() {
            return (existing.value().to_string(), false);
        }
    }
    (format!("{VISITOR_PREFIX}{}", Uuid::new_v4()), true)
}

/// Builds the long-lived visitor cookie for a freshly minted identifier.
#[must_use]
pub fn build_cookie(visitor_id: String) -> Cookie<'static> {
    Cookie::build((VISITOR_COOKIE, visitor_id))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(COOKIE_MAX_AGE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_existing_cookie_value() {
        let jar = CookieJar::new().add(Cookie::new(VISITOR_COOKIE, "v_existing"));
        let (visitor_id, minted) = get_or_create(&jar);
        assert_eq!(visitor_id, "v_existing");
        assert!(!minted);
    }

    #[test]
    fn mints_when_cookie_is_missing() {
        let jar = CookieJar::new();
        let (visitor_id, minted) = get_or_create(&jar);
        assert!(visitor_id.starts_with("v_"));
        assert!(visitor_id.len() > VISITOR_PREFIX.len());
        assert!(minted);
    }

    #[test]
    fn mints_when_cookie_is_empty() {
        let jar = CookieJar::new().add(Cookie::new(VISITOR_COOKIE, ""));
        let (visitor_id, minted) = get_or_create(&jar);
        assert!(visitor_id.starts_with("v_"));
        assert!(minted);
    }

    #[test]
    fn minted_ids_are_unique() {
        let jar = CookieJar::new();
        let (a, _) = get_or_create(&jar);
        let (b, _) = get_or_create(&jar);
        assert_ne!(a, b);
    }

    #[test]
    fn cookie_carries_the_required_attributes() {
        let cookie = build_cookie("v_abc".to_string());
        assert_eq!(cookie.name(), VISITOR_COOKIE);
        assert_eq!(cookie.value(), "v_abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(COOKIE_MAX_AGE));
    }
}
