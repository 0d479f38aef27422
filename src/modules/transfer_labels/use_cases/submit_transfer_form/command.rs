use crate::modules::transfer_labels::core::record::{TransferField, TransferRecord};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransferForm {
    pub transaction_number: String,
    pub ticket_number: String,
    pub volume: String,
    pub source_cd: String,
    pub destination_cd: String,
    pub sap_transfer_order: String,
    pub transaction_link: String,
    pub submitted_at: i64,
}

impl SubmitTransferForm {
    /// Build the command from field name/value pairs as posted by the form.
    /// Missing names count as empty values; unknown names are ignored.
    pub fn from_fields(fields: &HashMap<String, String>, submitted_at: i64) -> Self {
        let value = |field: TransferField| fields.get(field.name()).cloned().unwrap_or_default();
        Self {
            transaction_number: value(TransferField::TransactionNumber),
            ticket_number: value(TransferField::TicketNumber),
            volume: value(TransferField::Volume),
            source_cd: value(TransferField::SourceCd),
            destination_cd: value(TransferField::DestinationCd),
            sap_transfer_order: value(TransferField::SapTransferOrder),
            transaction_link: value(TransferField::TransactionLink),
            submitted_at,
        }
    }

    pub fn into_record(self) -> TransferRecord {
        TransferRecord {
            transaction_number: self.transaction_number,
            ticket_number: self.ticket_number,
            volume: self.volume,
            source_cd: self.source_cd,
            destination_cd: self.destination_cd,
            sap_transfer_order: self.sap_transfer_order,
            transaction_link: self.transaction_link,
        }
    }
}
