use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::intents::TransferLabelIntent;
use crate::modules::transfer_labels::core::record::TransferField;
use std::collections::BTreeSet;

/// Every required field that was left empty, reported together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields missing: {}", join_names(.missing_fields))]
pub struct ValidationError {
    pub missing_fields: BTreeSet<TransferField>,
}

impl ValidationError {
    pub fn missing_field_names(&self) -> Vec<&'static str> {
        self.missing_fields.iter().map(|field| field.name()).collect()
    }
}

fn join_names(fields: &BTreeSet<TransferField>) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub enum Decision {
    Accepted {
        events: Vec<TransferSessionEvent>,
        intents: Vec<TransferLabelIntent>,
    },
    Rejected {
        reason: ValidationError,
        intents: Vec<TransferLabelIntent>,
    },
}
