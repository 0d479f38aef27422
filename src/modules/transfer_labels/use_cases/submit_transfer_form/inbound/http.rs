use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use std::collections::HashMap;

use crate::modules::transfer_labels::core::state::ActiveView;
use crate::modules::transfer_labels::use_cases::errors::ApplicationError;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::command::SubmitTransferForm;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::inbound::form_view::render_edit_form;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;
use crate::shell::views::{Page, render_page};

async fn edit_page(state: &AppState, body: String) -> Result<String, StatusCode> {
    let session = state
        .queries
        .current_state()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let notifications = state.take_notifications().await;
    Ok(render_page(Page {
        active: ActiveView::Edit,
        preview_enabled: session.current_record().is_some(),
        logo_url: &state.config.logo_url,
        notifications: &notifications,
        body,
    }))
}

/// GET `/`: the form always starts blank.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    match edit_page(&state, render_edit_form(|_| String::new())).await {
        Ok(html) => Html(html).into_response(),
        Err(status) => status.into_response(),
    }
}

/// POST `/transfer-form`.
pub async fn handle(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let command = SubmitTransferForm::from_fields(&fields, Utc::now().timestamp_millis());

    match state.submit_handler.handle(command).await {
        Ok(_) => Redirect::to("/preview").into_response(),
        Err(ApplicationError::Validation(_)) => {
            let body =
                render_edit_form(|field| fields.get(field.name()).cloned().unwrap_or_default());
            match edit_page(&state, body).await {
                Ok(html) => (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response(),
                Err(status) => status.into_response(),
            }
        }
        Err(ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. })) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
