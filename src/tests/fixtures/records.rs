use crate::modules::transfer_labels::core::record::{LabelExtension, TransferRecord};
use crate::tests::fixtures::commands::submit_transfer_form::SubmitTransferFormBuilder;

/// The record an accepted fixture form produces.
pub fn make_transfer_record() -> TransferRecord {
    SubmitTransferFormBuilder::new().build().into_record()
}

pub fn make_label_extension() -> LabelExtension {
    LabelExtension::new("12", "NF-000123")
}
