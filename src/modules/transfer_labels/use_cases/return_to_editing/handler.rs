use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::evolve::evolve;
use crate::modules::transfer_labels::core::state::TransferSessionState;
use crate::modules::transfer_labels::use_cases::errors::ApplicationError;
use crate::modules::transfer_labels::use_cases::return_to_editing::decide::decide_return;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct ReturnToEditingHandler<TEventStore>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
{
    stream_id: String,
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ReturnToEditingHandler<TEventStore>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
{
    pub fn new(stream_id: impl Into<String>, event_store: Arc<TEventStore>) -> Self {
        Self {
            stream_id: stream_id.into(),
            event_store,
        }
    }

    pub async fn handle(&self, returned_at: i64) -> Result<TransferSessionState, ApplicationError> {
        let stream = self.event_store.load(&self.stream_id).await?;
        let state = stream
            .events
            .into_iter()
            .fold(TransferSessionState::Empty, evolve);

        let events = decide_return(&state, returned_at);
        if events.is_empty() {
            return Ok(state);
        }
        self.event_store
            .append(&self.stream_id, stream.version, &events)
            .await?;
        tracing::debug!("returned to the transfer form");
        Ok(events.into_iter().fold(state, evolve))
    }
}
