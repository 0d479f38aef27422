use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::state::TransferSessionState;

pub fn evolve(state: TransferSessionState, event: TransferSessionEvent) -> TransferSessionState {
    match (state, event) {
        (_, TransferSessionEvent::TransferRecordSubmittedV1(e)) => {
            TransferSessionState::Previewing {
                record: e.record,
                submitted_at: e.submitted_at,
            }
        }
        (
            TransferSessionState::Previewing {
                record,
                submitted_at,
            },
            TransferSessionEvent::ReturnedToEditingV1(_),
        ) => TransferSessionState::Editing {
            record,
            submitted_at,
        },
        (state, TransferSessionEvent::ReturnedToEditingV1(_)) => state,
    }
}

#[cfg(test)]
mod transfer_session_evolve_tests {
    use super::*;
    use crate::modules::transfer_labels::core::events::v1::transfer_record_submitted::TransferRecordSubmittedV1;
    use crate::modules::transfer_labels::core::record::TransferRecord;
    use crate::tests::fixtures::events::{
        make_returned_to_editing_v1_event, make_transfer_record_submitted_v1_event,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn submitted_event() -> TransferRecordSubmittedV1 {
        make_transfer_record_submitted_v1_event()
    }

    fn returned() -> TransferSessionEvent {
        TransferSessionEvent::ReturnedToEditingV1(make_returned_to_editing_v1_event())
    }

    #[rstest]
    fn it_should_evolve_the_state_to_previewing(submitted_event: TransferRecordSubmittedV1) {
        let state = evolve(
            TransferSessionState::Empty,
            TransferSessionEvent::TransferRecordSubmittedV1(submitted_event.clone()),
        );
        assert_eq!(
            state,
            TransferSessionState::Previewing {
                record: submitted_event.record,
                submitted_at: submitted_event.submitted_at,
            }
        );
    }

    #[rstest]
    fn a_new_submission_should_replace_the_record_wholesale(
        submitted_event: TransferRecordSubmittedV1,
    ) {
        let first = evolve(
            TransferSessionState::Empty,
            TransferSessionEvent::TransferRecordSubmittedV1(submitted_event),
        );
        let replacement = TransferRecord {
            transaction_number: "T2".into(),
            sap_transfer_order: String::new(),
            ..TransferRecord::default()
        };
        let next = evolve(
            first,
            TransferSessionEvent::TransferRecordSubmittedV1(TransferRecordSubmittedV1 {
                record: replacement.clone(),
                submitted_at: 1_700_000_200_000,
            }),
        );
        assert_eq!(next.current_record(), Some(&replacement));
    }

    #[rstest]
    fn returning_to_editing_should_keep_the_current_record(
        submitted_event: TransferRecordSubmittedV1,
    ) {
        let previewing = evolve(
            TransferSessionState::Empty,
            TransferSessionEvent::TransferRecordSubmittedV1(submitted_event.clone()),
        );
        let editing = evolve(previewing, returned());
        assert_eq!(
            editing,
            TransferSessionState::Editing {
                record: submitted_event.record,
                submitted_at: submitted_event.submitted_at,
            }
        );
    }

    #[rstest]
    fn returning_to_editing_without_a_record_should_not_change_the_state() {
        let state = evolve(TransferSessionState::Empty, returned());
        assert_eq!(state, TransferSessionState::Empty);
    }
}
