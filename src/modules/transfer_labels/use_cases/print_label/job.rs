use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintJobState {
    Idle,
    ContextOpened,
    DocumentWritten,
    BarcodeRequested,
    BarcodeReady,
    BarcodeFailed,
    PrintTriggered,
}

impl PrintJobState {
    pub fn can_move_to(self, next: PrintJobState) -> bool {
        use PrintJobState::*;
        matches!(
            (self, next),
            (Idle, ContextOpened)
                | (ContextOpened, DocumentWritten)
                | (ContextOpened, Idle)
                | (DocumentWritten, BarcodeRequested)
                | (BarcodeRequested, BarcodeReady)
                | (BarcodeRequested, BarcodeFailed)
                | (BarcodeReady, PrintTriggered)
                | (BarcodeFailed, PrintTriggered)
                | (BarcodeFailed, Idle)
                | (PrintTriggered, Idle)
        )
    }
}

impl fmt::Display for PrintJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("print job {job_id} cannot move from {from} to {to}")]
pub struct InvalidTransition {
    pub job_id: Uuid,
    pub from: PrintJobState,
    pub to: PrintJobState,
}

/// One print invocation and every state it went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    id: Uuid,
    trail: Vec<PrintJobState>,
}

impl PrintJob {
    pub fn start() -> Self {
        Self::with_id(Uuid::now_v7())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            trail: vec![PrintJobState::Idle],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> PrintJobState {
        self.trail
            .last()
            .copied()
            .unwrap_or(PrintJobState::Idle)
    }

    pub fn trail(&self) -> &[PrintJobState] {
        &self.trail
    }

    pub fn into_trail(self) -> Vec<PrintJobState> {
        self.trail
    }

    pub fn advance(&mut self, next: PrintJobState) -> Result<(), InvalidTransition> {
        let from = self.state();
        if !from.can_move_to(next) {
            return Err(InvalidTransition {
                job_id: self.id,
                from,
                to: next,
            });
        }
        tracing::debug!(job_id = %self.id, %from, to = %next, "print job transition");
        self.trail.push(next);
        Ok(())
    }
}
