use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::transfer_labels::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::transfer_labels::core::intents::TransferLabelIntent;
use crate::modules::transfer_labels::core::notification::Notification;
use crate::modules::transfer_labels::core::record::LabelExtension;
use crate::modules::transfer_labels::core::state::ActiveView;
use crate::modules::transfer_labels::use_cases::preview_label::label_view::LabelView;
use crate::modules::transfer_labels::use_cases::preview_label::render::render_label_preview;
use crate::modules::transfer_labels::use_cases::print_label::format::PrintFormat;
use crate::shared::core::html::escape;
use crate::shell::state::{AppState, NOTIFICATIONS_TOPIC};
use crate::shell::views::{Page, render_page};

pub const PRINT_WINDOW_NAME: &str = "transfer-label-print";

#[derive(Deserialize, Serialize)]
pub struct PreviewParams {
    #[serde(skip_serializing)]
    pub print: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_pieces: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
}

impl PreviewParams {
    /// The same preview without the one-shot `print` flag.
    fn clean_location(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if !query.is_empty() => format!("/preview?{query}"),
            _ => "/preview".to_string(),
        }
    }
}

/// GET `/preview`. `?print=unavailable` records the notification once and
/// redirects back to the clean preview.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> impl IntoResponse {
    if params.print.as_deref() == Some("unavailable") {
        tracing::warn!("browser refused to open the print window");
        let intents = vec![TransferLabelIntent::Notify {
            notification: Notification::print_unavailable(),
        }];
        if let Err(error) = dispatch_intents(
            state.outbox.as_ref(),
            NOTIFICATIONS_TOPIC,
            Utc::now().timestamp_millis(),
            intents,
        )
        .await
        {
            tracing::error!(%error, "could not record print unavailable notification");
        }
        return Redirect::to(&params.clean_location()).into_response();
    }

    let session = match state.queries.current_state().await {
        Ok(session) => session,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let Some(record) = session.current_record() else {
        return Redirect::to("/").into_response();
    };

    let extension = state.label_extension(params.quantity_pieces, params.invoice_number);
    let view = LabelView::project(record, &extension, state.config.logo_url.as_str());
    let mut body = render_label_preview(&view, state.barcode_renderer.as_ref()).await;
    body.push_str(&render_preview_actions(&extension));

    let notifications = state.take_notifications().await;
    Html(render_page(Page {
        active: ActiveView::Preview,
        preview_enabled: true,
        logo_url: &state.config.logo_url,
        notifications: &notifications,
        body,
    }))
    .into_response()
}

/// Format selector, "back" and "print". Print opens a named window first and
/// falls back to `?print=unavailable` when the browser refuses it.
fn render_preview_actions(extension: &LabelExtension) -> String {
    let mut html = String::from(r#"<div class="formats">"#);
    for format in [PrintFormat::Label, PrintFormat::A4] {
        let checked = if format == PrintFormat::default() {
            " checked"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<label><input type="radio" form="print-form" name="format" value="{}"{checked} /> {}</label>"#,
            format.as_str(),
            format.display_name()
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="actions">"#);
    html.push_str(
        r#"<form method="post" action="/back"><button type="submit">Voltar</button></form>"#,
    );
    html.push_str(&format!(
        r#"<form id="print-form" method="get" action="/print" target="{PRINT_WINDOW_NAME}" onsubmit="if (!window.open('', '{PRINT_WINDOW_NAME}', 'height=600,width=800')) {{ event.preventDefault(); var query = new URLSearchParams(new FormData(this)); query.delete('format'); query.set('print', 'unavailable'); window.location.assign('/preview?' + query); }}">"#
    ));
    html.push_str(&format!(
        r#"<input type="hidden" name="quantity_pieces" value="{}" /><input type="hidden" name="invoice_number" value="{}" />"#,
        escape(&extension.quantity_pieces),
        escape(&extension.invoice_number)
    ));
    html.push_str(r#"<button type="submit" class="primary">Imprimir Etiqueta</button></form>"#);
    html.push_str("</div>");
    html
}
