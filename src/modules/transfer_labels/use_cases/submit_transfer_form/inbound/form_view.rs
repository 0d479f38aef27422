use crate::modules::transfer_labels::core::record::TransferField;
use crate::shared::core::html::escape;

fn label(field: TransferField) -> &'static str {
    match field {
        TransferField::TransactionNumber => "TRANSAÇÃO *",
        TransferField::TicketNumber => "TICKET *",
        TransferField::Volume => "VOLUME *",
        TransferField::SourceCd => "DE (CD de origem) *",
        TransferField::DestinationCd => "PARA (CD de destino) *",
        TransferField::SapTransferOrder => "PEDIDO DE TRANSFERÊNCIA SAP",
        TransferField::TransactionLink => "LINK DA TRANSAÇÃO *",
    }
}

fn placeholder(field: TransferField) -> &'static str {
    match field {
        TransferField::TransactionNumber => "Número da transação",
        TransferField::TicketNumber => "Número do ticket",
        TransferField::Volume => "Quantia ou volume",
        TransferField::SourceCd => "CD de origem",
        TransferField::DestinationCd => "CD de destino",
        TransferField::SapTransferOrder => "Opcional",
        TransferField::TransactionLink => "URL para código de barras",
    }
}

const INSTRUCTIONS: [&str; 5] = [
    "Preencha todos os campos obrigatórios (marcados com *).",
    "O campo \"PEDIDO DE TRANSFERÊNCIA SAP\" é opcional.",
    "O LINK DA TRANSAÇÃO será usado para gerar o código de barras.",
    "Após preencher o formulário, clique em \"Gerar Etiqueta\".",
    "Visualize a etiqueta e utilize o botão \"Imprimir\".",
];

/// Edit view body. `value_of` supplies what to put back in each input; the
/// form is blank when it returns empty strings.
pub fn render_edit_form(value_of: impl Fn(TransferField) -> String) -> String {
    let mut html = String::from(
        r#"<div class="card"><form method="post" action="/transfer-form"><div class="fields">"#,
    );
    for field in TransferField::ALL {
        let wide = if field == TransferField::TransactionLink {
            " wide"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<div class="field{wide}"><label for="{name}">{label}</label><input id="{name}" name="{name}" value="{value}" placeholder="{placeholder}" /></div>"#,
            name = field.name(),
            label = label(field),
            value = escape(&value_of(field)),
            placeholder = placeholder(field),
        ));
    }
    html.push_str(
        r#"</div><div class="actions"><button type="submit" class="primary">Gerar Etiqueta</button></div></form></div>"#,
    );

    html.push_str(r#"<div class="card"><h2>Instruções:</h2><ol>"#);
    for step in INSTRUCTIONS {
        html.push_str(&format!("<li>{}</li>", escape(step)));
    }
    html.push_str("</ol></div>");
    html
}

#[cfg(test)]
mod edit_form_view_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_render_every_field_in_order() {
        let html = render_edit_form(|_| String::new());
        let positions: Vec<usize> = TransferField::ALL
            .iter()
            .map(|field| html.find(&format!(r#"name="{}""#, field.name())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(html.contains("PEDIDO DE TRANSFERÊNCIA SAP</label>"));
        assert!(html.contains(r#"name="sourceCD""#));
    }

    #[rstest]
    fn it_should_keep_and_escape_entered_values() {
        let html = render_edit_form(|field| match field {
            TransferField::Volume => r#"10" onfocus="x"#.to_string(),
            _ => String::new(),
        });
        assert!(html.contains(r#"value="10&quot; onfocus=&quot;x""#));
    }

    #[rstest]
    fn it_should_list_the_instructions() {
        let html = render_edit_form(|_| String::new());
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.contains("Gerar Etiqueta</button>"));
    }
}
