use crate::modules::transfer_labels::use_cases::submit_transfer_form::decision::ValidationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
