use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use carecore_core::{
    AppError,
    events::{AccessEvent, AccessEventType},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{AppState, authz::Capability, geo, visitor};

/// The single shared list key in the key-value store.
pub const EVENTS_KEY: &str = "access_events_v1";

/// Retention cap; the list is trimmed to this length on every write.
pub const MAX_EVENTS: usize = 2000;

const DEFAULT_LIMIT: isize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct RecordEventRequest {
    #[serde(rename = "type")]
    pub kind: Option<AccessEventType>,
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct OkResponse {
    ok: bool,
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<AccessEvent>,
}

/// `GET /access-events` - the most recent events, newest first.
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<EventsResponse>, AppError> {
    let limit = parse_limit(query.limit.as_deref());
    let events = state.event_store.range(EVENTS_KEY, 0, limit - 1).await?;
    Ok(Json(EventsResponse { events }))
}

/// Clamps the requested limit to `[1, MAX_EVENTS]`. Missing, empty, and
/// non-numeric values fall back to the default rather than producing an
/// unbounded read.
fn parse_limit(raw: Option<&str>) -> isize {
    match raw {
        None | Some("") => DEFAULT_LIMIT,
        Some(s) => s
            .parse::<isize>()
            .map_or(DEFAULT_LIMIT, |n| n.clamp(1, MAX_EVENTS as isize)),
    }
}

/// `POST /access-events` - validate and record one access event.
///
/// A malformed JSON body is treated as an empty object so that the request
/// fails on the `type` check instead of the parse.
#[instrument(skip(state, jar, headers, body))]
pub async fn record_event(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request: RecordEventRequest = serde_json::from_slice(&body).unwrap_or_default();

    let Some(kind) = request.kind else {
        return Err(AppError::InvalidEventType);
    };

    let (visitor_id, minted) = visitor::get_or_create(&jar);
    let geo = geo::from_headers(&headers);

    let event = AccessEvent {
        path: request.path,
        user_agent: geo::non_empty_header(&headers, "user-agent"),
        referrer: geo::non_empty_header(&headers, "referer"),
        country: geo.country,
        region: geo.region,
        city: geo.city,
        ..AccessEvent::new(kind, visitor_id.clone())
    };

    let event_id = event.id;
    state
        .event_store
        .prepend_bounded(EVENTS_KEY, event, MAX_EVENTS)
        .await?;

    info!(
        event_id = %event_id,
        event_type = %kind.as_str(),
        visitor_id = %visitor_id,
        "Access event recorded"
    );

    let jar = if minted {
        jar.add(visitor::build_cookie(visitor_id))
    } else {
        jar
    };

    Ok((jar, Json(OkResponse { ok: true })))
}

/// `POST /access-events/reset` - clear the entire event list. Irreversible.
#[instrument(skip(state, headers))]
pub async fn reset_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OkResponse>, AppError> {
    if !state
        .authorizer
        .allows(&headers, Capability::ResetAccessEvents)
    {
        return Err(AppError::Forbidden);
    }

    state.event_store.delete(EVENTS_KEY).await?;

    info!("Access event list cleared");

    Ok(Json(OkResponse { ok: true }))
}
