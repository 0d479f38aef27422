use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::transfer_labels::core::record::TransferRecord;
use crate::modules::transfer_labels::use_cases::errors::ApplicationError;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::command::SubmitTransferForm;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "TransferRecord")]
pub struct GqlTransferRecord {
    pub transaction_number: String,
    pub ticket_number: String,
    pub volume: String,
    #[graphql(name = "sourceCD")]
    pub source_cd: String,
    #[graphql(name = "destinationCD")]
    pub destination_cd: String,
    pub sap_transfer_order: Option<String>,
    pub transaction_link: String,
}

impl From<&TransferRecord> for GqlTransferRecord {
    fn from(record: &TransferRecord) -> Self {
        Self {
            transaction_number: record.transaction_number.clone(),
            ticket_number: record.ticket_number.clone(),
            volume: record.volume.clone(),
            source_cd: record.source_cd.clone(),
            destination_cd: record.destination_cd.clone(),
            sap_transfer_order: record.sap_transfer_order().map(str::to_string),
            transaction_link: record.transaction_link.clone(),
        }
    }
}

#[derive(InputObject)]
pub struct TransferFormInput {
    #[graphql(default)]
    pub transaction_number: String,
    #[graphql(default)]
    pub ticket_number: String,
    #[graphql(default)]
    pub volume: String,
    #[graphql(name = "sourceCD", default)]
    pub source_cd: String,
    #[graphql(name = "destinationCD", default)]
    pub destination_cd: String,
    #[graphql(default)]
    pub sap_transfer_order: String,
    #[graphql(default)]
    pub transaction_link: String,
}

#[derive(SimpleObject)]
pub struct SubmitResult {
    pub record: Option<GqlTransferRecord>,
    pub missing_fields: Vec<String>,
}

#[derive(Default)]
pub struct SubmitTransferFormMutation;

#[Object]
impl SubmitTransferFormMutation {
    async fn submit_transfer_form(
        &self,
        context: &Context<'_>,
        input: TransferFormInput,
    ) -> GqlResult<SubmitResult> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitTransferForm {
            transaction_number: input.transaction_number,
            ticket_number: input.ticket_number,
            volume: input.volume,
            source_cd: input.source_cd,
            destination_cd: input.destination_cd,
            sap_transfer_order: input.sap_transfer_order,
            transaction_link: input.transaction_link,
            submitted_at: Utc::now().timestamp_millis(),
        };

        match state.submit_handler.handle(command).await {
            Ok(record) => Ok(SubmitResult {
                record: Some(GqlTransferRecord::from(&record)),
                missing_fields: Vec::new(),
            }),
            Err(ApplicationError::Validation(reason)) => Ok(SubmitResult {
                record: None,
                missing_fields: reason
                    .missing_field_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
