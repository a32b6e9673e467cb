mod memory;
mod redis_store;

use async_trait::async_trait;
use carecore_core::{AppError, events::AccessEvent};

pub use memory::InMemoryEventStore;
pub use redis_store::RedisEventStore;

/// Storage port for the shared bounded event list.
///
/// All handlers depend on this trait rather than a concrete store client.
/// `range` follows Redis LRANGE semantics: inclusive bounds, negative
/// indices counted from the tail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Prepend an event to the list under `key`, then trim the list to the
    /// most recent `cap` entries. The two steps are separate store calls;
    /// a momentarily over-length list self-heals on the next write.
    async fn prepend_bounded(
        &self,
        key: &str,
        event: AccessEvent,
        cap: usize,
    ) -> Result<(), AppError>;

    /// Read entries `start..=stop` (newest first).
    async fn range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<AccessEvent>, AppError>;

    /// Delete the entire list.
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Connectivity check for the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
