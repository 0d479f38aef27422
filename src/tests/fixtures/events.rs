use crate::modules::transfer_labels::core::events::v1::returned_to_editing::ReturnedToEditingV1;
use crate::modules::transfer_labels::core::events::v1::transfer_record_submitted::TransferRecordSubmittedV1;
use crate::tests::fixtures::records::make_transfer_record;

pub fn make_transfer_record_submitted_v1_event() -> TransferRecordSubmittedV1 {
    TransferRecordSubmittedV1 {
        record: make_transfer_record(),
        submitted_at: 1_700_000_000_000,
    }
}

pub fn make_returned_to_editing_v1_event() -> ReturnedToEditingV1 {
    ReturnedToEditingV1 {
        returned_at: 1_700_000_060_000,
    }
}
