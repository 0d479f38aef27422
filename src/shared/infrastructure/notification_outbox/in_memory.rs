use crate::shared::infrastructure::notification_outbox::{
    NotificationOutbox, OutboxError, OutboxRow,
};
use std::collections::HashSet;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryNotificationOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<Uuid>>,
    offline: bool,
}

impl InMemoryNotificationOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl NotificationOutbox for InMemoryNotificationOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(row.message_id) {
                return Err(OutboxError::Duplicate {
                    message_id: row.message_id,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }

    async fn drain(&self, topic: &str) -> Result<Vec<OutboxRow>, OutboxError> {
        if self.offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let mut rows = self.rows.lock().await;
        let (drained, kept): (Vec<_>, Vec<_>) =
            rows.drain(..).partition(|row| row.topic == topic);
        *rows = kept;
        Ok(drained)
    }
}
