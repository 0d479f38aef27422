use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::transfer_labels::barcode::BarcodeTarget;
use crate::modules::transfer_labels::use_cases::print_label::document::PrintDocument;
use crate::modules::transfer_labels::use_cases::print_label::print_context::{
    PrintContext, PrintContextError, PrintWindow,
};

/// Everything a print window received for one job.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintedSheet {
    pub job_id: Uuid,
    pub document: Option<PrintDocument>,
    pub print_requested: bool,
}

/// Keeps print windows in memory until the caller takes them out and ships
/// the document to the browser.
#[derive(Debug, Default)]
pub struct InMemoryPrintContext {
    sheets: Arc<Mutex<Vec<PrintedSheet>>>,
    unavailable: bool,
}

impl InMemoryPrintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_unavailable(&mut self) {
        self.unavailable = !self.unavailable;
    }

    pub async fn take(&self, job_id: Uuid) -> Option<PrintedSheet> {
        let mut sheets = self.sheets.lock().await;
        let index = sheets.iter().position(|sheet| sheet.job_id == job_id)?;
        Some(sheets.remove(index))
    }

    pub async fn sheets(&self) -> Vec<PrintedSheet> {
        self.sheets.lock().await.clone()
    }
}

#[async_trait]
impl PrintContext for InMemoryPrintContext {
    async fn open(&self, job_id: Uuid) -> Result<Box<dyn PrintWindow>, PrintContextError> {
        if self.unavailable {
            return Err(PrintContextError::Unavailable(
                "print windows are blocked".into(),
            ));
        }
        self.sheets.lock().await.push(PrintedSheet {
            job_id,
            document: None,
            print_requested: false,
        });
        Ok(Box::new(InMemoryPrintWindow {
            job_id,
            sheets: self.sheets.clone(),
        }))
    }
}

struct InMemoryPrintWindow {
    job_id: Uuid,
    sheets: Arc<Mutex<Vec<PrintedSheet>>>,
}

impl InMemoryPrintWindow {
    async fn with_sheet<T>(
        &self,
        f: impl FnOnce(&mut PrintedSheet) -> Result<T, PrintContextError> + Send,
    ) -> Result<T, PrintContextError> {
        let mut sheets = self.sheets.lock().await;
        let sheet = sheets
            .iter_mut()
            .find(|sheet| sheet.job_id == self.job_id)
            .ok_or(PrintContextError::Closed(self.job_id))?;
        f(sheet)
    }
}

#[async_trait]
impl PrintWindow for InMemoryPrintWindow {
    async fn write(&mut self, document: PrintDocument) -> Result<(), PrintContextError> {
        self.with_sheet(|sheet| {
            sheet.document = Some(document);
            Ok(())
        })
        .await
    }

    async fn placeholder(&self, id: &str) -> Option<BarcodeTarget> {
        let sheets = self.sheets.lock().await;
        sheets
            .iter()
            .find(|sheet| sheet.job_id == self.job_id)
            .and_then(|sheet| sheet.document.as_ref())
            .map(|document| document.barcode.clone())
            .filter(|barcode| barcode.id == id)
    }

    async fn replace_placeholder(
        &mut self,
        target: BarcodeTarget,
    ) -> Result<(), PrintContextError> {
        let job_id = self.job_id;
        self.with_sheet(|sheet| {
            let document = sheet
                .document
                .as_mut()
                .ok_or(PrintContextError::NothingToPrint(job_id))?;
            document.barcode = target;
            Ok(())
        })
        .await
    }

    async fn print(&mut self) -> Result<(), PrintContextError> {
        let job_id = self.job_id;
        self.with_sheet(|sheet| {
            if sheet.document.is_none() {
                return Err(PrintContextError::NothingToPrint(job_id));
            }
            sheet.print_requested = true;
            Ok(())
        })
        .await
    }

    async fn close(&mut self) {
        self.sheets
            .lock()
            .await
            .retain(|sheet| sheet.job_id != self.job_id);
    }
}
