// Shared test fixture for the SubmitTransferForm command, backed by
// `json/submit_transfer_form.json`.

use crate::modules::transfer_labels::core::record::TransferField;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::command::SubmitTransferForm;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTransferFormDto {
    pub transaction_number: String,
    pub ticket_number: String,
    pub volume: String,
    #[serde(rename = "sourceCD")]
    pub source_cd: String,
    #[serde(rename = "destinationCD")]
    pub destination_cd: String,
    pub sap_transfer_order: String,
    pub transaction_link: String,
}

pub struct SubmitTransferFormBuilder {
    inner: SubmitTransferForm,
}

impl SubmitTransferFormBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_transfer_form.json")
                .unwrap();
        let dto: SubmitTransferFormDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitTransferForm {
                transaction_number: dto.transaction_number,
                ticket_number: dto.ticket_number,
                volume: dto.volume,
                source_cd: dto.source_cd,
                destination_cd: dto.destination_cd,
                sap_transfer_order: dto.sap_transfer_order,
                transaction_link: dto.transaction_link,
                submitted_at: 1_700_000_000_000,
            },
        }
    }

    pub fn transaction_number(mut self, v: impl Into<String>) -> Self {
        self.inner.transaction_number = v.into();
        self
    }

    pub fn ticket_number(mut self, v: impl Into<String>) -> Self {
        self.inner.ticket_number = v.into();
        self
    }

    pub fn volume(mut self, v: impl Into<String>) -> Self {
        self.inner.volume = v.into();
        self
    }

    pub fn source_cd(mut self, v: impl Into<String>) -> Self {
        self.inner.source_cd = v.into();
        self
    }

    pub fn destination_cd(mut self, v: impl Into<String>) -> Self {
        self.inner.destination_cd = v.into();
        self
    }

    pub fn sap_transfer_order(mut self, v: impl Into<String>) -> Self {
        self.inner.sap_transfer_order = v.into();
        self
    }

    pub fn transaction_link(mut self, v: impl Into<String>) -> Self {
        self.inner.transaction_link = v.into();
        self
    }

    pub fn submitted_at(mut self, v: i64) -> Self {
        self.inner.submitted_at = v;
        self
    }

    /// Blank out one field.
    pub fn clear(self, field: TransferField) -> Self {
        match field {
            TransferField::TransactionNumber => self.transaction_number(""),
            TransferField::TicketNumber => self.ticket_number(""),
            TransferField::Volume => self.volume(""),
            TransferField::SourceCd => self.source_cd(""),
            TransferField::DestinationCd => self.destination_cd(""),
            TransferField::SapTransferOrder => self.sap_transfer_order(""),
            TransferField::TransactionLink => self.transaction_link(""),
        }
    }

    pub fn build(self) -> SubmitTransferForm {
        self.inner
    }
}
