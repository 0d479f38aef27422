use crate::modules::transfer_labels::core::intents::TransferLabelIntent;
use crate::modules::transfer_labels::core::notification::Notification;
use crate::shared::infrastructure::notification_outbox::{
    NotificationOutbox, OutboxError, OutboxRow,
};
use uuid::Uuid;

/// Translate domain intents into outbox rows and enqueue them in order.
pub async fn dispatch_intents<TOutbox: NotificationOutbox + ?Sized>(
    outbox: &TOutbox,
    topic: &str,
    occurred_at: i64,
    intents: Vec<TransferLabelIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        match intent {
            TransferLabelIntent::Notify { notification } => {
                let payload = serde_json::to_value(&notification)
                    .map_err(|e| OutboxError::Backend(e.to_string()))?;
                outbox
                    .enqueue(OutboxRow {
                        message_id: Uuid::now_v7(),
                        topic: topic.to_string(),
                        message_type: notification.message_type().to_string(),
                        occurred_at,
                        payload,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}

/// Take every pending notification of `topic`. Rows that no longer parse are
/// logged and dropped.
pub async fn drain_notifications<TOutbox: NotificationOutbox + ?Sized>(
    outbox: &TOutbox,
    topic: &str,
) -> Result<Vec<Notification>, OutboxError> {
    let rows = outbox.drain(topic).await?;
    Ok(rows
        .into_iter()
        .filter_map(
            |row| match serde_json::from_value::<Notification>(row.payload) {
                Ok(notification) => Some(notification),
                Err(error) => {
                    tracing::warn!(
                        message_id = %row.message_id,
                        %error,
                        "dropping unreadable notification"
                    );
                    None
                }
            },
        )
        .collect())
}
