// Barcode rendering port.
//
// The label and the print document never know how a symbol is drawn. They
// hand a placeholder to a `BarcodeRenderer` and wait for its result; the
// returned future completing is the signal that the symbol is in place.

pub mod code128;
pub mod svg;

use async_trait::async_trait;
use thiserror::Error;

pub use code128::Code128Error;

/// Stable lookup key of the barcode placeholder in both renderings.
pub const BARCODE_PLACEHOLDER_ID: &str = "barcode";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    #[error(transparent)]
    Encoding(#[from] Code128Error),

    #[error("barcode target `{0}` not found")]
    TargetNotFound(String),

    #[error("failed to write barcode symbol")]
    Write(#[from] std::fmt::Error),
}

/// What currently sits inside a barcode placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaceholderContent {
    #[default]
    Empty,
    Symbol(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeTarget {
    pub id: String,
    pub content: PlaceholderContent,
}

impl BarcodeTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: PlaceholderContent::Empty,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.content, PlaceholderContent::Symbol(_))
    }
}

/// Drawing options, named after the usual CODE128 renderer knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeOptions {
    /// Width of one module in px.
    pub width: f64,
    pub height: u32,
    pub display_value: bool,
    pub font_size: u32,
    pub text_margin: u32,
    pub margin: u32,
    /// Stretch the symbol to its container, capped at `height` px.
    pub fit_container: bool,
}

impl BarcodeOptions {
    pub fn preview() -> Self {
        Self {
            width: 1.5,
            height: 50,
            display_value: true,
            font_size: 12,
            text_margin: 2,
            margin: 10,
            fit_container: false,
        }
    }

    pub fn print() -> Self {
        Self {
            width: 2.0,
            height: 80,
            display_value: true,
            font_size: 12,
            text_margin: 2,
            margin: 10,
            fit_container: true,
        }
    }
}

#[async_trait]
pub trait BarcodeRenderer: Send + Sync {
    async fn render(
        &self,
        target: &mut BarcodeTarget,
        value: &str,
        options: &BarcodeOptions,
    ) -> Result<(), BarcodeError>;
}
