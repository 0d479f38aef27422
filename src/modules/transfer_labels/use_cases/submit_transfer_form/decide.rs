use crate::modules::transfer_labels::core::{
    events::{TransferSessionEvent, v1::transfer_record_submitted::TransferRecordSubmittedV1},
    intents::TransferLabelIntent,
    notification::Notification,
    record::TransferField,
};
use crate::modules::transfer_labels::use_cases::submit_transfer_form::{
    command::SubmitTransferForm,
    decision::{Decision, ValidationError},
};
use std::collections::BTreeSet;

pub fn decide_submit(command: SubmitTransferForm) -> Decision {
    let submitted_at = command.submitted_at;
    let record = command.into_record();

    let missing_fields: BTreeSet<_> = TransferField::REQUIRED
        .into_iter()
        .filter(|&field| record.get(field).is_empty())
        .collect();

    if !missing_fields.is_empty() {
        return Decision::Rejected {
            reason: ValidationError { missing_fields },
            intents: vec![TransferLabelIntent::Notify {
                notification: Notification::validation_failed(),
            }],
        };
    }

    Decision::Accepted {
        events: vec![TransferSessionEvent::TransferRecordSubmittedV1(
            TransferRecordSubmittedV1 {
                record,
                submitted_at,
            },
        )],
        intents: vec![TransferLabelIntent::Notify {
            notification: Notification::label_generated(),
        }],
    }
}
