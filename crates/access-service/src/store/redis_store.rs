use async_trait::async_trait;
use carecore_core::{AppError, events::AccessEvent};
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;
use tracing::{instrument, warn};

use super::EventStore;

/// Redis-backed event list.
pub struct RedisEventStore {
    client: Client,
    conn: Mutex<Option<redis::aio::MultiplexedConnection>>,
}

impl RedisEventStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            conn: Mutex::new(None),
        }
    }

    async fn get_conn(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        let mut guard = self.conn.lock().await;
        if guard.is_none() {
            let conn = self
                .client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| AppError::Store(e.to_string()))?;
            *guard = Some(conn);
        }
        Ok(guard.clone().unwrap())
    }
}

#[async_trait]
impl EventStore for RedisEventStore {
    #[instrument(skip(self, event))]
    async fn prepend_bounded(
        &self,
        key: &str,
        event: AccessEvent,
        cap: usize,
    ) -> Result<(), AppError> {
        let payload =
            serde_json::to_string(&event).map_err(|e| AppError::Serialization(e.to_string()))?;

        let mut conn = self.get_conn().await?;

        let _: () = conn
            .lpush(key, payload)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        // Trim is unconditional on every write, not just when over the cap.
        let _: () = conn
            .ltrim(key, 0, cap as isize - 1)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<AccessEvent>, AppError> {
        let mut conn = self.get_conn().await?;

        let raw: Vec<String> = conn
            .lrange(key, start, stop)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        let events = raw
            .iter()
            .filter_map(|entry| match serde_json::from_str::<AccessEvent>(entry) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!("Skipping undecodable event entry: {:?}", e);
                    None
                }
            })
            .collect();

        Ok(events)
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .del(key)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }

    /// Check Redis connection with PING command.
    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.get_conn().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        Ok(())
    }
}
