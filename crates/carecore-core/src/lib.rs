pub mod config;
pub mod error;
pub mod events;
pub mod telemetry;

pub use error::{AppError, Result};
pub use events::{AccessEvent, AccessEventType};
