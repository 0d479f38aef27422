use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::transfer_labels::use_cases::print_label::composer::BarcodeStatus;
use crate::modules::transfer_labels::use_cases::print_label::format::PrintFormat;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct PrintResult {
    pub job_id: String,
    pub html: String,
    pub barcode_ready: bool,
    pub print_requested: bool,
}

#[derive(Default)]
pub struct PrintLabelMutation;

#[Object]
impl PrintLabelMutation {
    /// `format` is `label` (or `etiqueta`) or `a4`.
    async fn print_label(
        &self,
        context: &Context<'_>,
        format: Option<String>,
        quantity_pieces: Option<String>,
        invoice_number: Option<String>,
    ) -> GqlResult<PrintResult> {
        let state = context.data_unchecked::<AppState>();
        let format = match format {
            Some(raw) => raw.parse::<PrintFormat>()?,
            None => PrintFormat::default(),
        };

        let session = state.queries.current_state().await?;
        let record = session
            .current_record()
            .ok_or_else(|| async_graphql::Error::new("no transfer record to print"))?;
        let extension = state.label_extension(quantity_pieces, invoice_number);

        let outcome = state
            .print_composer
            .print(record, &extension, format)
            .await?;
        let sheet = state
            .print_context
            .take(outcome.job_id)
            .await
            .ok_or_else(|| async_graphql::Error::new("print window closed"))?;
        let html = sheet
            .document
            .map(|document| document.to_html(sheet.print_requested))
            .ok_or_else(|| async_graphql::Error::new("print window has no document"))?;

        Ok(PrintResult {
            job_id: outcome.job_id.to_string(),
            html,
            barcode_ready: outcome.barcode == BarcodeStatus::Ready,
            print_requested: outcome.print_requested,
        })
    }
}
