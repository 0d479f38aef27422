use crate::modules::transfer_labels::adapters::outbound::intent_outbox::drain_notifications;
use crate::modules::transfer_labels::adapters::outbound::print_context_in_memory::InMemoryPrintContext;
use crate::modules::transfer_labels::barcode::BarcodeRenderer;
use crate::modules::transfer_labels::barcode::svg::SvgBarcodeRenderer;
use crate::modules::transfer_labels::core::events::TransferSessionEvent;
use crate::modules::transfer_labels::core::notification::Notification;
use crate::modules::transfer_labels::core::record::LabelExtension;
use crate::modules::transfer_labels::use_cases::print_label::composer::PrintComposer;
use crate::modules::transfer_labels::use_cases::return_to_editing::handler::ReturnToEditingHandler;
use crate::modules::transfer_labels::use_cases::session_query::TransferSessionQueries;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::handler::SubmitTransferFormHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::notification_outbox::in_memory::InMemoryNotificationOutbox;
use crate::shell::config::Config;
use std::sync::Arc;

pub const NOTIFICATIONS_TOPIC: &str = "transfer-labels.notifications";
pub const SESSION_STREAM_ID: &str = "TransferSession-default";

pub type SessionEventStore = InMemoryEventStore<TransferSessionEvent>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub queries: Arc<TransferSessionQueries<SessionEventStore>>,
    pub submit_handler:
        Arc<SubmitTransferFormHandler<SessionEventStore, InMemoryNotificationOutbox>>,
    pub return_handler: Arc<ReturnToEditingHandler<SessionEventStore>>,
    pub outbox: Arc<InMemoryNotificationOutbox>,
    pub barcode_renderer: Arc<dyn BarcodeRenderer>,
    pub print_context: Arc<InMemoryPrintContext>,
    pub print_composer: Arc<PrintComposer>,
}

impl AppState {
    pub fn in_memory(config: Config) -> Self {
        Self::from_parts(
            config,
            InMemoryEventStore::new(),
            InMemoryNotificationOutbox::new(),
            InMemoryPrintContext::new(),
        )
    }

    pub fn from_parts(
        config: Config,
        event_store: SessionEventStore,
        outbox: InMemoryNotificationOutbox,
        print_context: InMemoryPrintContext,
    ) -> Self {
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(outbox);
        let print_context = Arc::new(print_context);
        let barcode_renderer: Arc<dyn BarcodeRenderer> = Arc::new(SvgBarcodeRenderer::new());

        let print_composer = PrintComposer::new(
            NOTIFICATIONS_TOPIC,
            config.logo_url.clone(),
            print_context.clone(),
            barcode_renderer.clone(),
            outbox.clone(),
        )
        .with_policy(config.barcode_failure_policy)
        .with_settle_ms(config.print_settle_ms);

        Self {
            queries: Arc::new(TransferSessionQueries::new(
                SESSION_STREAM_ID,
                event_store.clone(),
            )),
            submit_handler: Arc::new(SubmitTransferFormHandler::new(
                NOTIFICATIONS_TOPIC,
                SESSION_STREAM_ID,
                event_store.clone(),
                outbox.clone(),
            )),
            return_handler: Arc::new(ReturnToEditingHandler::new(SESSION_STREAM_ID, event_store)),
            outbox,
            barcode_renderer,
            print_context,
            print_composer: Arc::new(print_composer),
            config: Arc::new(config),
        }
    }

    /// Label values for this request, with configured defaults for blanks.
    pub fn label_extension(
        &self,
        quantity_pieces: Option<String>,
        invoice_number: Option<String>,
    ) -> LabelExtension {
        LabelExtension::new(
            quantity_pieces.unwrap_or_default(),
            invoice_number.unwrap_or_default(),
        )
        .or(&self.config.label_defaults)
    }

    /// Pending notifications, consumed by the page about to be rendered.
    pub async fn take_notifications(&self) -> Vec<Notification> {
        drain_notifications(self.outbox.as_ref(), NOTIFICATIONS_TOPIC)
            .await
            .unwrap_or_else(|error| {
                tracing::error!(%error, "could not drain notifications");
                Vec::new()
            })
    }
}
