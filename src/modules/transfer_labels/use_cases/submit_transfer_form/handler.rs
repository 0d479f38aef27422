use crate::modules::transfer_labels::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::intents::TransferLabelIntent;
use crate::modules::transfer_labels::core::record::TransferRecord;
use crate::modules::transfer_labels::use_cases::errors::ApplicationError;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::command::SubmitTransferForm;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::decide::decide_submit;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::decision::Decision;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::notification_outbox::NotificationOutbox;
use std::sync::Arc;

pub struct SubmitTransferFormHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
    TOutbox: NotificationOutbox + Send + Sync + 'static,
{
    topic: String,
    stream_id: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> SubmitTransferFormHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
    TOutbox: NotificationOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        stream_id: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            stream_id: stream_id.into(),
            event_store,
            outbox,
        }
    }

    /// Validate the form and, when complete, make it the current record.
    /// A rejected form leaves the session untouched.
    pub async fn handle(
        &self,
        command: SubmitTransferForm,
    ) -> Result<TransferRecord, ApplicationError> {
        let submitted_at = command.submitted_at;
        let stream = self.event_store.load(&self.stream_id).await?;

        match decide_submit(command) {
            Decision::Accepted { events, intents } => {
                let record = events
                    .iter()
                    .find_map(|event| match event {
                        TransferSessionEvent::TransferRecordSubmittedV1(e) => {
                            Some(e.record.clone())
                        }
                        _ => None,
                    })
                    .ok_or_else(|| {
                        ApplicationError::Unexpected("accepted submission without a record".into())
                    })?;
                self.event_store
                    .append(&self.stream_id, stream.version, &events)
                    .await?;
                self.notify(submitted_at, intents).await;
                tracing::info!(
                    transaction_number = %record.transaction_number,
                    has_sap_order = record.sap_transfer_order().is_some(),
                    "transfer form accepted"
                );
                Ok(record)
            }
            Decision::Rejected { reason, intents } => {
                self.notify(submitted_at, intents).await;
                tracing::info!(missing = ?reason.missing_field_names(), "transfer form rejected");
                Err(ApplicationError::Validation(reason))
            }
        }
    }

    /// A failed enqueue is logged and never overrides the decided outcome.
    async fn notify(&self, submitted_at: i64, intents: Vec<TransferLabelIntent>) {
        if let Err(e) = dispatch_intents(&*self.outbox, &self.topic, submitted_at, intents).await {
            tracing::error!(error = %e, "failed to enqueue form notification");
        }
    }
}
