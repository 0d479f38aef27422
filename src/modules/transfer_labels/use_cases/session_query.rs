use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::evolve::evolve;
use crate::modules::transfer_labels::core::state::TransferSessionState;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;

/// Read side of the session: folds the stream into the current state.
pub struct TransferSessionQueries<TEventStore>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
{
    stream_id: String,
    event_store: Arc<TEventStore>,
}

impl<TEventStore> TransferSessionQueries<TEventStore>
where
    TEventStore: EventStore<TransferSessionEvent> + Send + Sync + 'static,
{
    pub fn new(stream_id: impl Into<String>, event_store: Arc<TEventStore>) -> Self {
        Self {
            stream_id: stream_id.into(),
            event_store,
        }
    }

    pub async fn current_state(&self) -> Result<TransferSessionState, EventStoreError> {
        let stream = self.event_store.load(&self.stream_id).await?;
        Ok(stream
            .events
            .into_iter()
            .fold(TransferSessionState::Empty, evolve))
    }
}
