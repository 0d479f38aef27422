use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::modules::transfer_labels::use_cases::print_label::composer::PrintError;
use crate::modules::transfer_labels::use_cases::print_label::format::PrintFormat;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PrintParams {
    #[serde(default)]
    pub format: PrintFormat,
    pub quantity_pieces: Option<String>,
    pub invoice_number: Option<String>,
}

/// GET `/print`: the standalone print document for the current record.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PrintParams>,
) -> impl IntoResponse {
    let session = match state.queries.current_state().await {
        Ok(session) => session,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let Some(record) = session.current_record() else {
        return StatusCode::CONFLICT.into_response();
    };
    let extension = state.label_extension(params.quantity_pieces, params.invoice_number);

    let outcome = match state
        .print_composer
        .print(record, &extension, params.format)
        .await
    {
        Ok(outcome) => outcome,
        Err(PrintError::Unavailable(_)) => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Err(error) => {
            tracing::error!(%error, "print job failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.print_context.take(outcome.job_id).await {
        Some(sheet) => match sheet.document {
            Some(document) => Html(document.to_html(sheet.print_requested)).into_response(),
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        },
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
