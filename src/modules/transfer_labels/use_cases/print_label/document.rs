use crate::modules::transfer_labels::barcode::{
    BARCODE_PLACEHOLDER_ID, BarcodeTarget, PlaceholderContent,
};
use crate::modules::transfer_labels::use_cases::preview_label::label_view::LabelView;
use crate::modules::transfer_labels::use_cases::print_label::format::PrintFormat;
use crate::shared::core::html::escape;

pub const PRINT_DOCUMENT_TITLE: &str = "Etiqueta de Transferência";

/// Standalone page written into a print window.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub format: PrintFormat,
    pub view: LabelView,
    pub barcode: BarcodeTarget,
    /// Delay between the page settling and the print request, in ms.
    pub settle_ms: u64,
}

impl PrintDocument {
    pub fn compose(view: LabelView, format: PrintFormat, settle_ms: u64) -> Self {
        Self {
            format,
            view,
            barcode: BarcodeTarget::new(BARCODE_PLACEHOLDER_ID),
            settle_ms,
        }
    }

    pub fn barcode_html(&self) -> String {
        match &self.barcode.content {
            PlaceholderContent::Empty => {
                format!(r#"<svg id="{}"></svg>"#, escape(&self.barcode.id))
            }
            PlaceholderContent::Symbol(svg) => svg.clone(),
            PlaceholderContent::Error(message) => format!("<p>{}</p>", escape(message)),
        }
    }

    /// The print request is embedded only when `print_requested` is set.
    pub fn to_html(&self, print_requested: bool) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\" />");
        html.push_str(&format!("<title>{PRINT_DOCUMENT_TITLE}</title>"));
        html.push_str(&format!("<style>{}</style>", self.stylesheet()));
        html.push_str("</head><body>");
        html.push_str(r#"<div class="print-container"><div class="print-content">"#);
        html.push_str(&self.view.tables_html());
        html.push_str(&format!(
            r#"<div class="barcode-container" id="barcode-wrapper">{}</div>"#,
            self.barcode_html()
        ));
        html.push_str("</div></div>");
        if print_requested {
            html.push_str(&format!(
                "<script>window.addEventListener(\"load\", function () {{ setTimeout(function () {{ window.print(); }}, {}); }});</script>",
                self.settle_ms
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn stylesheet(&self) -> String {
        let geometry = self.format.geometry();
        let margin = geometry.margin();
        let max_width = geometry.max_width.unwrap_or("none");
        format!(
            "@page {{ size: {page_size}; margin: 0; }} \
body {{ margin: 0; padding: 0; font-family: Arial, sans-serif; }} \
.print-container {{ width: {width}; height: {height}; padding: {padding}; box-sizing: border-box; page-break-after: always; margin: {margin}; }} \
.print-content {{ border: 1px solid #000; height: {content_height}; padding: 10px; box-sizing: border-box; max-width: {max_width}; margin: {margin}; }} \
.logo {{ display: flex; justify-content: center; margin-bottom: 10px; }} \
.logo img {{ height: 40px; }} \
table {{ width: 100%; border-collapse: collapse; margin-bottom: 10px; }} \
th, td {{ border: 1px solid #000; padding: 5px; text-align: left; }} \
th {{ font-weight: bold; background-color: #f5f5f5; }} \
.barcode-container {{ display: flex; justify-content: center; margin-top: 10px; }} \
.section-title {{ font-weight: bold; font-size: 14px; margin-top: 10px; margin-bottom: 5px; }} \
@media print {{ body {{ width: {width}; height: {height}; }} }}",
            page_size = geometry.page_size,
            width = geometry.width,
            height = geometry.height,
            padding = geometry.padding,
            content_height = geometry.content_height,
        )
    }
}
