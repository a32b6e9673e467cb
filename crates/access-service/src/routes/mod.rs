mod access_events;
mod health;

pub use access_events::{EVENTS_KEY, MAX_EVENTS, list_events, record_event, reset_events};
pub use health::{health, ready};
