use crate::modules::transfer_labels::core::{
    events::{TransferSessionEvent, v1::returned_to_editing::ReturnedToEditingV1},
    state::TransferSessionState,
};

/// Leaving the preview only needs recording when a preview is showing.
pub fn decide_return(state: &TransferSessionState, returned_at: i64) -> Vec<TransferSessionEvent> {
    match state {
        TransferSessionState::Previewing { .. } => {
            vec![TransferSessionEvent::ReturnedToEditingV1(
                ReturnedToEditingV1 { returned_at },
            )]
        }
        _ => Vec::new(),
    }
}
