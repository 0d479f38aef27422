use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintFormat {
    #[default]
    #[serde(alias = "etiqueta")]
    Label,
    A4,
}

/// Page and container box for one print format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub page_size: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub padding: &'static str,
    pub content_height: &'static str,
    pub max_width: Option<&'static str>,
    pub centered: bool,
}

impl PrintFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintFormat::Label => "label",
            PrintFormat::A4 => "a4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrintFormat::Label => "Formato Etiqueta (100x150mm)",
            PrintFormat::A4 => "Formato A4",
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        match self {
            PrintFormat::Label => PageGeometry {
                page_size: "100mm 150mm",
                width: "100mm",
                height: "150mm",
                padding: "5mm",
                content_height: "100%",
                max_width: None,
                centered: false,
            },
            PrintFormat::A4 => PageGeometry {
                page_size: "A4",
                width: "210mm",
                height: "auto",
                padding: "10mm",
                content_height: "auto",
                max_width: Some("190mm"),
                centered: true,
            },
        }
    }
}

impl PageGeometry {
    pub fn margin(&self) -> &'static str {
        if self.centered { "0 auto" } else { "0" }
    }
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown print format `{0}`")]
pub struct UnknownPrintFormat(pub String);

impl FromStr for PrintFormat {
    type Err = UnknownPrintFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "label" | "etiqueta" => Ok(PrintFormat::Label),
            "a4" => Ok(PrintFormat::A4),
            _ => Err(UnknownPrintFormat(raw.to_string())),
        }
    }
}
