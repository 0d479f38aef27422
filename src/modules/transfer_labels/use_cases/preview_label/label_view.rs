use crate::modules::transfer_labels::core::labels;
use crate::modules::transfer_labels::core::record::{LabelExtension, TransferRecord};
use crate::shared::core::html::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub heading: &'static str,
    pub value: String,
}

impl LabelRow {
    fn new(heading: &'static str, value: &str) -> Self {
        Self {
            heading,
            value: value.to_string(),
        }
    }
}

/// What a transfer label shows, independent of where it is drawn. The screen
/// preview and the print document are both built from this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    pub logo_url: String,
    pub transfer_rows: Vec<LabelRow>,
    pub route_rows: Vec<LabelRow>,
    pub barcode_value: String,
}

impl LabelView {
    pub fn project(
        record: &TransferRecord,
        extension: &LabelExtension,
        logo_url: impl Into<String>,
    ) -> Self {
        let mut transfer_rows = vec![
            LabelRow::new(labels::TRANSACTION, &record.transaction_number),
            LabelRow::new(labels::TICKET, &record.ticket_number),
            LabelRow::new(labels::VOLUME, &record.volume),
            LabelRow::new(labels::QUANTITY_PIECES, &extension.quantity_pieces),
            LabelRow::new(labels::INVOICE_NUMBER, &extension.invoice_number),
        ];
        if let Some(order) = record.sap_transfer_order() {
            transfer_rows.push(LabelRow::new(labels::SAP_ORDER, order));
        }

        Self {
            logo_url: logo_url.into(),
            transfer_rows,
            route_rows: vec![
                LabelRow::new(labels::FROM, &record.source_cd),
                LabelRow::new(labels::TO, &record.destination_cd),
            ],
            barcode_value: record.transaction_link.clone(),
        }
    }

    /// Logo, both section titles and both tables, as HTML.
    pub fn tables_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="logo"><img src="{}" alt="{}" /></div>"#,
            escape(&self.logo_url),
            labels::BRAND_ALT
        ));
        push_section(&mut html, labels::TRANSFER_SECTION, &self.transfer_rows);
        push_section(&mut html, labels::ROUTE_SECTION, &self.route_rows);
        html
    }
}

fn push_section(html: &mut String, title: &str, rows: &[LabelRow]) {
    html.push_str(&format!(r#"<div class="section-title">{title}</div>"#));
    html.push_str("<table><tbody>");
    for row in rows {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            row.heading,
            escape(&row.value)
        ));
    }
    html.push_str("</tbody></table>");
}

#[cfg(test)]
mod label_view_tests {
    use super::*;
    use crate::tests::fixtures::records::{make_label_extension, make_transfer_record};
    use rstest::rstest;

    const LOGO: &str = "https://example.com/logo.svg";

    fn headings(rows: &[LabelRow]) -> Vec<&'static str> {
        rows.iter().map(|row| row.heading).collect()
    }

    #[rstest]
    fn it_should_omit_the_sap_row_when_blank() {
        let view = LabelView::project(&make_transfer_record(), &make_label_extension(), LOGO);
        assert_eq!(
            headings(&view.transfer_rows),
            vec![
                labels::TRANSACTION,
                labels::TICKET,
                labels::VOLUME,
                labels::QUANTITY_PIECES,
                labels::INVOICE_NUMBER,
            ]
        );
        assert!(!view.tables_html().contains(labels::SAP_ORDER));
    }

    #[rstest]
    fn it_should_add_exactly_one_sap_row_last() {
        let record = TransferRecord {
            sap_transfer_order: "SAP-99".into(),
            ..make_transfer_record()
        };
        let view = LabelView::project(&record, &make_label_extension(), LOGO);
        assert_eq!(
            view.transfer_rows.last(),
            Some(&LabelRow::new(labels::SAP_ORDER, "SAP-99"))
        );
        assert_eq!(view.tables_html().matches(labels::SAP_ORDER).count(), 1);
    }

    #[rstest]
    fn it_should_list_origin_then_destination() {
        let view = LabelView::project(&make_transfer_record(), &make_label_extension(), LOGO);
        assert_eq!(
            view.route_rows,
            vec![
                LabelRow::new(labels::FROM, "CD01"),
                LabelRow::new(labels::TO, "CD02"),
            ]
        );
    }

    #[rstest]
    fn it_should_encode_the_transaction_link_unchanged() {
        let record = TransferRecord {
            transaction_link: " http://x/1?a=b ".into(),
            ..make_transfer_record()
        };
        let view = LabelView::project(&record, &make_label_extension(), LOGO);
        assert_eq!(view.barcode_value, " http://x/1?a=b ");
    }

    #[rstest]
    fn it_should_show_the_label_extension_values() {
        let view = LabelView::project(&make_transfer_record(), &make_label_extension(), LOGO);
        assert_eq!(view.transfer_rows[3].value, "12");
        assert_eq!(view.transfer_rows[4].value, "NF-000123");
    }

    #[rstest]
    fn it_should_escape_user_values_in_the_tables() {
        let record = TransferRecord {
            volume: "<b>10</b>".into(),
            ..make_transfer_record()
        };
        let html =
            LabelView::project(&record, &make_label_extension(), LOGO).tables_html();
        assert!(html.contains("<td>&lt;b&gt;10&lt;/b&gt;</td>"));
    }
}
