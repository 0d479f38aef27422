use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields collected by the transfer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferField {
    TransactionNumber,
    TicketNumber,
    Volume,
    #[serde(rename = "sourceCD")]
    SourceCd,
    #[serde(rename = "destinationCD")]
    DestinationCd,
    SapTransferOrder,
    TransactionLink,
}

impl TransferField {
    pub const ALL: [TransferField; 7] = [
        TransferField::TransactionNumber,
        TransferField::TicketNumber,
        TransferField::Volume,
        TransferField::SourceCd,
        TransferField::DestinationCd,
        TransferField::SapTransferOrder,
        TransferField::TransactionLink,
    ];

    pub const REQUIRED: [TransferField; 6] = [
        TransferField::TransactionNumber,
        TransferField::TicketNumber,
        TransferField::Volume,
        TransferField::SourceCd,
        TransferField::DestinationCd,
        TransferField::TransactionLink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransferField::TransactionNumber => "transactionNumber",
            TransferField::TicketNumber => "ticketNumber",
            TransferField::Volume => "volume",
            TransferField::SourceCd => "sourceCD",
            TransferField::DestinationCd => "destinationCD",
            TransferField::SapTransferOrder => "sapTransferOrder",
            TransferField::TransactionLink => "transactionLink",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn is_required(self) -> bool {
        self != TransferField::SapTransferOrder
    }
}

impl fmt::Display for TransferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated transfer request. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub transaction_number: String,
    pub ticket_number: String,
    pub volume: String,
    pub source_cd: String,
    pub destination_cd: String,
    pub sap_transfer_order: String,
    pub transaction_link: String,
}

impl TransferRecord {
    pub fn get(&self, field: TransferField) -> &str {
        match field {
            TransferField::TransactionNumber => &self.transaction_number,
            TransferField::TicketNumber => &self.ticket_number,
            TransferField::Volume => &self.volume,
            TransferField::SourceCd => &self.source_cd,
            TransferField::DestinationCd => &self.destination_cd,
            TransferField::SapTransferOrder => &self.sap_transfer_order,
            TransferField::TransactionLink => &self.transaction_link,
        }
    }

    /// The SAP transfer order, or `None` when it was left blank.
    pub fn sap_transfer_order(&self) -> Option<&str> {
        Some(self.sap_transfer_order.as_str()).filter(|order| !order.is_empty())
    }
}

/// Label-only values that the transfer form does not collect. Whoever embeds
/// the form and the label must supply them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelExtension {
    pub quantity_pieces: String,
    pub invoice_number: String,
}

impl LabelExtension {
    pub fn new(quantity_pieces: impl Into<String>, invoice_number: impl Into<String>) -> Self {
        Self {
            quantity_pieces: quantity_pieces.into(),
            invoice_number: invoice_number.into(),
        }
    }

    /// Fill blanks from `defaults`, keeping explicitly supplied values.
    pub fn or(self, defaults: &LabelExtension) -> Self {
        Self {
            quantity_pieces: if self.quantity_pieces.is_empty() {
                defaults.quantity_pieces.clone()
            } else {
                self.quantity_pieces
            },
            invoice_number: if self.invoice_number.is_empty() {
                defaults.invoice_number.clone()
            } else {
                self.invoice_number
            },
        }
    }
}
