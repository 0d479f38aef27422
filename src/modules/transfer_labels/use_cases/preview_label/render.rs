use crate::modules::transfer_labels::barcode::{
    BarcodeOptions, BarcodeRenderer, BarcodeTarget, PlaceholderContent,
};
use crate::modules::transfer_labels::core::labels;
use crate::modules::transfer_labels::use_cases::preview_label::label_view::LabelView;
use crate::shared::core::html::escape;

pub const PREVIEW_BARCODE_ID: &str = "preview-barcode";

/// On-screen label. A value the symbology rejects is shown as an error in
/// place of the symbol; the rest of the label is unaffected.
pub async fn render_label_preview(view: &LabelView, renderer: &dyn BarcodeRenderer) -> String {
    let mut target = BarcodeTarget::new(PREVIEW_BARCODE_ID);
    if let Err(error) = renderer
        .render(&mut target, &view.barcode_value, &BarcodeOptions::preview())
        .await
    {
        tracing::warn!(%error, "preview barcode could not be generated");
        target.content =
            PlaceholderContent::Error(format!("{}: {error}", labels::BARCODE_ERROR_PREFIX));
    }

    let barcode = match target.content {
        PlaceholderContent::Symbol(svg) => svg,
        PlaceholderContent::Error(message) => format!("<p>{}</p>", escape(&message)),
        PlaceholderContent::Empty => String::new(),
    };

    format!(
        r#"<div class="label-card"><div class="label">{}<div class="barcode-container">{barcode}</div></div></div>"#,
        view.tables_html()
    )
}
