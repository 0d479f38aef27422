// Print host port.
//
// A print context hands out windows. The composer writes a document into a
// window, fills its barcode placeholder and then asks the window to print.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::transfer_labels::barcode::BarcodeTarget;
use crate::modules::transfer_labels::use_cases::print_label::document::PrintDocument;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrintContextError {
    #[error("print context unavailable: {0}")]
    Unavailable(String),

    #[error("print window {0} is closed")]
    Closed(Uuid),

    #[error("print window {0} has no document")]
    NothingToPrint(Uuid),
}

#[async_trait]
pub trait PrintContext: Send + Sync {
    async fn open(&self, job_id: Uuid) -> Result<Box<dyn PrintWindow>, PrintContextError>;
}

#[async_trait]
pub trait PrintWindow: Send + Sync {
    async fn write(&mut self, document: PrintDocument) -> Result<(), PrintContextError>;

    /// Looks the placeholder up by id in the written document.
    async fn placeholder(&self, id: &str) -> Option<BarcodeTarget>;

    async fn replace_placeholder(&mut self, target: BarcodeTarget)
    -> Result<(), PrintContextError>;

    async fn print(&mut self) -> Result<(), PrintContextError>;

    /// Drops the window and whatever was written into it.
    async fn close(&mut self);
}
