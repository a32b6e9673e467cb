//! Best-effort geographic context from edge-injected headers.
//!
//! The hosting edge network stamps coarse location headers on incoming
//! requests. All fields are optional, unverified metadata and must never be
//! used for access control.

use axum::http::HeaderMap;

const COUNTRY_HEADER: &str = "x-vercel-ip-country";
const COUNTRY_CODE_HEADER: &str = "x-vercel-ip-country-code";
const REGION_HEADER: &str = "x-vercel-ip-country-region";
const CITY_HEADER: &str = "x-vercel-ip-city";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoContext {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

/// Extracts geo hints from the request headers. Empty values count as absent.
#[must_use]
pub fn from_headers(headers: &HeaderMap) -> GeoContext {
    let country = non_empty_header(headers, COUNTRY_HEADER)
        .or_else(|| non_empty_header(headers, COUNTRY_CODE_HEADER));

    GeoContext {
        country,
        region: non_empty_header(headers, REGION_HEADER),
        city: non_empty_header(headers, CITY_HEADER),
    }
}

pub(crate) fn non_empty_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn extracts_all_fields_when_present() {
        let geo = from_headers(&headers(&[
            ("x-vercel-ip-country", "United States"),
            ("x-vercel-ip-country-region", "CA"),
            ("x-vercel-ip-city", "San Francisco"),
        ]));
        assert_eq!(geo.country.as_deref(), Some("United States"));
        assert_eq!(geo.region.as_deref(), Some("CA"));
        assert_eq!(geo.city.as_deref(), Some("San Francisco"));
    }

    #[test]
    fn falls_back_to_country_code() {
        let geo = from_headers(&headers(&[("x-vercel-ip-country-code", "US")]));
        assert_eq!(geo.country.as_deref(), Some("US"));
    }

    #[test]
    fn full_country_header_wins_over_code() {
        let geo = from_headers(&headers(&[
            ("x-vercel-ip-country", "United States"),
            ("x-vercel-ip-country-code", "US"),
        ]));
        assert_eq!(geo.country.as_deref(), Some("United States"));
    }

    #[test]
    fn absent_headers_yield_none() {
        let geo = from_headers(&HeaderMap::new());
        assert_eq!(geo, GeoContext::default());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let geo = from_headers(&headers(&[
            ("x-vercel-ip-country", ""),
            ("x-vercel-ip-city", ""),
        ]));
        assert_eq!(geo, GeoContext::default());
    }
}
