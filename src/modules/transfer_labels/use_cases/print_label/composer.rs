use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::transfer_labels::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::transfer_labels::barcode::{
    BARCODE_PLACEHOLDER_ID, BarcodeError, BarcodeOptions, BarcodeRenderer, BarcodeTarget,
    PlaceholderContent,
};
use crate::modules::transfer_labels::core::intents::TransferLabelIntent;
use crate::modules::transfer_labels::core::labels;
use crate::modules::transfer_labels::core::notification::Notification;
use crate::modules::transfer_labels::core::record::{LabelExtension, TransferRecord};
use crate::modules::transfer_labels::use_cases::preview_label::label_view::LabelView;
use crate::modules::transfer_labels::use_cases::print_label::document::PrintDocument;
use crate::modules::transfer_labels::use_cases::print_label::format::PrintFormat;
use crate::modules::transfer_labels::use_cases::print_label::job::{
    InvalidTransition, PrintJob, PrintJobState,
};
use crate::modules::transfer_labels::use_cases::print_label::print_context::{
    PrintContext, PrintContextError, PrintWindow,
};
use crate::shared::infrastructure::notification_outbox::NotificationOutbox;

/// What to do with the print request when the symbol could not be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarcodeFailurePolicy {
    /// Print the label with the error text in place of the symbol.
    #[default]
    Print,
    /// Keep the document with the error text but never request print.
    Abort,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown barcode failure policy `{0}`")]
pub struct UnknownFailurePolicy(pub String);

impl FromStr for BarcodeFailurePolicy {
    type Err = UnknownFailurePolicy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "print" => Ok(BarcodeFailurePolicy::Print),
            "abort" => Ok(BarcodeFailurePolicy::Abort),
            _ => Err(UnknownFailurePolicy(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeStatus {
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOutcome {
    pub job_id: Uuid,
    pub format: PrintFormat,
    pub barcode: BarcodeStatus,
    pub print_requested: bool,
    pub trail: Vec<PrintJobState>,
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("print unavailable: {0}")]
    Unavailable(#[source] PrintContextError),

    #[error("print window failed: {0}")]
    Window(#[source] PrintContextError),

    #[error(transparent)]
    Job(#[from] InvalidTransition),
}

pub struct PrintComposer {
    topic: String,
    logo_url: String,
    policy: BarcodeFailurePolicy,
    settle_ms: u64,
    context: Arc<dyn PrintContext>,
    renderer: Arc<dyn BarcodeRenderer>,
    outbox: Arc<dyn NotificationOutbox>,
}

impl PrintComposer {
    pub fn new(
        topic: impl Into<String>,
        logo_url: impl Into<String>,
        context: Arc<dyn PrintContext>,
        renderer: Arc<dyn BarcodeRenderer>,
        outbox: Arc<dyn NotificationOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            logo_url: logo_url.into(),
            policy: BarcodeFailurePolicy::default(),
            settle_ms: 0,
            context,
            renderer,
            outbox,
        }
    }

    pub fn with_policy(mut self, policy: BarcodeFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Open a print window, write the label into it, fill the barcode and,
    /// once the renderer has answered, request print.
    pub async fn print(
        &self,
        record: &TransferRecord,
        extension: &LabelExtension,
        format: PrintFormat,
    ) -> Result<PrintOutcome, PrintError> {
        let mut job = PrintJob::start();
        let job_id = job.id();
        tracing::info!(%job_id, %format, "print requested");

        let mut window = match self.context.open(job_id).await {
            Ok(window) => window,
            Err(error) => {
                tracing::warn!(%job_id, %error, "print context unavailable");
                self.notify_unavailable().await;
                return Err(PrintError::Unavailable(error));
            }
        };

        match self
            .fill_and_print(&mut job, window.as_mut(), record, extension, format)
            .await
        {
            Ok((barcode, print_requested)) => {
                tracing::info!(%job_id, print_requested, "print job finished");
                Ok(PrintOutcome {
                    job_id,
                    format,
                    barcode,
                    print_requested,
                    trail: job.into_trail(),
                })
            }
            Err(error) => {
                tracing::error!(%job_id, %error, "print job failed");
                window.close().await;
                Err(error)
            }
        }
    }

    async fn fill_and_print(
        &self,
        job: &mut PrintJob,
        window: &mut dyn PrintWindow,
        record: &TransferRecord,
        extension: &LabelExtension,
        format: PrintFormat,
    ) -> Result<(BarcodeStatus, bool), PrintError> {
        let job_id = job.id();
        job.advance(PrintJobState::ContextOpened)?;

        let view = LabelView::project(record, extension, self.logo_url.as_str());
        let value = view.barcode_value.clone();
        if let Err(error) = window
            .write(PrintDocument::compose(view, format, self.settle_ms))
            .await
        {
            job.advance(PrintJobState::Idle)?;
            return Err(PrintError::Window(error));
        }
        job.advance(PrintJobState::DocumentWritten)?;

        job.advance(PrintJobState::BarcodeRequested)?;
        let barcode = match self.render_barcode(&*window, &value).await {
            Ok(target) => {
                window
                    .replace_placeholder(target)
                    .await
                    .map_err(PrintError::Window)?;
                job.advance(PrintJobState::BarcodeReady)?;
                BarcodeStatus::Ready
            }
            Err(error) => {
                tracing::warn!(%job_id, %error, "barcode generation failed");
                let mut target = BarcodeTarget::new(BARCODE_PLACEHOLDER_ID);
                target.content = PlaceholderContent::Error(format!(
                    "{}: {error}",
                    labels::BARCODE_ERROR_PREFIX
                ));
                window
                    .replace_placeholder(target)
                    .await
                    .map_err(PrintError::Window)?;
                job.advance(PrintJobState::BarcodeFailed)?;
                BarcodeStatus::Failed(error.to_string())
            }
        };

        let print_requested = match (&barcode, self.policy) {
            (BarcodeStatus::Failed(_), BarcodeFailurePolicy::Abort) => {
                tracing::info!(%job_id, "print aborted after barcode failure");
                job.advance(PrintJobState::Idle)?;
                false
            }
            _ => {
                window.print().await.map_err(PrintError::Window)?;
                job.advance(PrintJobState::PrintTriggered)?;
                job.advance(PrintJobState::Idle)?;
                true
            }
        };
        Ok((barcode, print_requested))
    }

    async fn render_barcode(
        &self,
        window: &dyn PrintWindow,
        value: &str,
    ) -> Result<BarcodeTarget, BarcodeError> {
        let mut target = window
            .placeholder(BARCODE_PLACEHOLDER_ID)
            .await
            .ok_or_else(|| BarcodeError::TargetNotFound(BARCODE_PLACEHOLDER_ID.to_string()))?;
        self.renderer
            .render(&mut target, value, &BarcodeOptions::print())
            .await?;
        Ok(target)
    }

    async fn notify_unavailable(&self) {
        let intents = vec![TransferLabelIntent::Notify {
            notification: Notification::print_unavailable(),
        }];
        if let Err(error) = dispatch_intents(
            self.outbox.as_ref(),
            &self.topic,
            Utc::now().timestamp_millis(),
            intents,
        )
        .await
        {
            tracing::error!(%error, "could not record print unavailable notification");
        }
    }
}
