use std::collections::HashMap;

use async_trait::async_trait;
use carecore_core::{AppError, events::AccessEvent};
use tokio::sync::Mutex;

use super::EventStore;

/// In-memory event list with the same semantics as the Redis adapter.
/// Used as the store substitute in the integration tests.
#[derive(Default)]
pub struct InMemoryEventStore {
    lists: Mutex<HashMap<String, Vec<AccessEvent>>>,
}

impl InMemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn resolve_index(index: isize, len: usize) -> isize {
    if index < 0 { len as isize + index } else { index }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn prepend_bounded(
        &self,
        key: &str,
        event: AccessEvent,
        cap: usize,
    ) -> Result<(), AppError> {
        let mut lists = self.lists.lock().await;
        let list = lists.entry(key.to_string()).or_default();
        list.insert(0, event);
        list.truncate(cap);
        Ok(())
    }

    async fn range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<AccessEvent>, AppError> {
        let lists = self.lists.lock().await;
        let Some(list) = lists.get(key) else {
            return Ok(Vec::new());
        };

        let len = list.len();
        let start = resolve_index(start, len).max(0) as usize;
        let stop = resolve_index(stop, len).min(len as isize - 1);

        if stop < 0 || start as isize > stop || start >= len {
            return Ok(Vec::new());
        }

        Ok(list[start..=stop as usize].to_vec())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut lists = self.lists.lock().await;
        lists.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
