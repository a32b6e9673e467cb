use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of recordable access-event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessEventType {
    PlatformAccess,
    CommercialEstimatesAccess,
}

impl AccessEventType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlatformAccess => "platform_access",
            Self::CommercialEstimatesAccess => "commercial_estimates_access",
        }
    }
}

/// An immutable record of a single access attempt.
///
/// Serializes to the wire shape consumed by the dashboard: camelCase keys,
/// `ts` as milliseconds since epoch, optional fields omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEvent {
    pub id: Uuid,
    pub ts: i64,
    #[serde(rename = "type")]
    pub kind: AccessEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub visitor_id: String,
}

impl AccessEvent {
    /// Creates an event with a fresh id and the current timestamp.
    /// Optional fields start absent; callers fill them from the request.
    #[must_use]
    pub fn new(kind: AccessEventType, visitor_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: Utc::now().timestamp_millis(),
            kind,
            path: None,
            user_agent: None,
            referrer: None,
            country: None,
            region: None,
            city: None,
            visitor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&AccessEventType::PlatformAccess).unwrap();
        assert_eq!(json, r#""platform_access""#);
        let json = serde_json::to_string(&AccessEventType::CommercialEstimatesAccess).unwrap();
        assert_eq!(json, r#""commercial_estimates_access""#);
    }

    #[test]
    fn unknown_event_type_fails_to_deserialize() {
        let result: Result<AccessEventType, _> = serde_json::from_str(r#""admin_access""#);
        assert!(result.is_err());
    }

    #[test]
    fn event_serializes_to_camel_case_and_omits_absent_fields() {
        let event = AccessEvent::new(AccessEventType::PlatformAccess, "v_abc".to_string());
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "platform_access");
        assert_eq!(value["visitorId"], "v_abc");
        assert!(value["ts"].is_i64());
        assert!(value.get("path").is_none());
        assert!(value.get("userAgent").is_none());
        assert!(value.get("country").is_none());
    }

    #[test]
    fn event_round_trips_with_optional_fields() {
        let mut event = AccessEvent::new(
            AccessEventType::CommercialEstimatesAccess,
            "v_xyz".to_string(),
        );
        event.path = Some("/pricing".to_string());
        event.user_agent = Some("Mozilla/5.0".to_string());
        event.country = Some("US".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let parsed: AccessEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, event.id);
        assert_eq!(parsed.kind, AccessEventType::CommercialEstimatesAccess);
        assert_eq!(parsed.path.as_deref(), Some("/pricing"));
        assert_eq!(parsed.country.as_deref(), Some("US"));
        assert_eq!(parsed.region, None);
        assert_eq!(parsed.visitor_id, "v_xyz");
    }
}
