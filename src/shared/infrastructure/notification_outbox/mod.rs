// Outbox for user-facing notifications.
//
// Decisions never talk to the screen directly. They emit intents, the module
// adapter turns them into rows, and the shell drains the rows of a topic the
// next time it renders a view.

pub mod in_memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row {message_id}")]
    Duplicate { message_id: Uuid },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxRow {
    pub message_id: Uuid,
    pub topic: String,
    pub message_type: String,
    pub occurred_at: i64,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait NotificationOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;

    /// Remove and return every pending row of `topic`, oldest first.
    async fn drain(&self, topic: &str) -> Result<Vec<OutboxRow>, OutboxError>;
}
