use crate::modules::transfer_labels::barcode::code128::Code128;
use crate::modules::transfer_labels::barcode::{
    BarcodeError, BarcodeOptions, BarcodeRenderer, BarcodeTarget, PlaceholderContent,
};
use crate::shared::core::html::escape;
use async_trait::async_trait;
use std::fmt::{self, Write};

/// Draws CODE128 symbols as inline SVG, in process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgBarcodeRenderer;

impl SvgBarcodeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn to_svg(
        &self,
        id: &str,
        value: &str,
        options: &BarcodeOptions,
    ) -> Result<String, BarcodeError> {
        let symbol = Code128::encode(value)?;
        let mut svg = String::new();
        write_svg(&mut svg, id, value, &symbol.modules(), options)?;
        Ok(svg)
    }
}

#[async_trait]
impl BarcodeRenderer for SvgBarcodeRenderer {
    async fn render(
        &self,
        target: &mut BarcodeTarget,
        value: &str,
        options: &BarcodeOptions,
    ) -> Result<(), BarcodeError> {
        let svg = self.to_svg(&target.id, value, options)?;
        target.content = PlaceholderContent::Symbol(svg);
        Ok(())
    }
}

fn write_svg(
    w: &mut impl Write,
    id: &str,
    value: &str,
    modules: &[bool],
    options: &BarcodeOptions,
) -> fmt::Result {
    let margin = options.margin as f64;
    let bar_height = options.height as f64;
    let text_height = if options.display_value {
        (options.font_size + options.text_margin) as f64
    } else {
        0.0
    };
    let width = modules.len() as f64 * options.width + 2.0 * margin;
    let height = bar_height + 2.0 * margin + text_height;

    write!(
        w,
        r#"<svg id="{}" xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}px" height="{height}px" viewBox="0 0 {width} {height}""#,
        escape(id),
    )?;
    if options.fit_container {
        write!(
            w,
            r#" preserveAspectRatio="xMidYMid meet" style="width: 100%; max-height: {}px;""#,
            options.height
        )?;
    }
    w.write_str(">")?;
    write!(
        w,
        r##"<rect x="0" y="0" width="{width}" height="{height}" style="fill:#ffffff;"/>"##
    )?;

    w.write_str(r##"<g style="fill:#000000;">"##)?;
    let mut start = None;
    for (index, &bar) in modules.iter().chain(std::iter::once(&false)).enumerate() {
        match (bar, start) {
            (true, None) => start = Some(index),
            (false, Some(from)) => {
                write!(
                    w,
                    r#"<rect x="{}" y="{margin}" width="{}" height="{bar_height}"/>"#,
                    margin + from as f64 * options.width,
                    (index - from) as f64 * options.width,
                )?;
                start = None;
            }
            _ => {}
        }
    }
    w.write_str("</g>")?;

    if options.display_value {
        write!(
            w,
            r#"<text x="{}" y="{}" style="font: {}px monospace;" text-anchor="middle">{}</text>"#,
            width / 2.0,
            margin + bar_height + options.text_margin as f64 + options.font_size as f64,
            options.font_size,
            escape(value),
        )?;
    }
    w.write_str("</svg>")
}
