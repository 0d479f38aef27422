// Page chrome shared by the edit and preview views.

use chrono::{Datelike, Utc};

use crate::modules::transfer_labels::core::notification::{Notification, NotificationVariant};
use crate::modules::transfer_labels::core::state::ActiveView;
use crate::shared::core::html::escape;

pub const APP_TITLE: &str = "Sistema de Etiquetas para Transferência de CDs";

pub struct Page<'a> {
    pub active: ActiveView,
    pub preview_enabled: bool,
    pub logo_url: &'a str,
    pub notifications: &'a [Notification],
    pub body: String,
}

pub fn render_page(page: Page<'_>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\" />");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />");
    html.push_str(&format!("<title>{APP_TITLE}</title><style>{STYLESHEET}</style></head><body>"));

    html.push_str(&format!(
        r#"<header><img src="{}" alt="Sistema de Etiquetas" class="brand" /><h1>{APP_TITLE}</h1><p>Preencha o formulário para gerar uma etiqueta de transferência</p></header>"#,
        escape(page.logo_url)
    ));

    html.push_str("<main>");
    html.push_str(&render_tabs(page.active, page.preview_enabled));
    html.push_str(&render_notifications(page.notifications));
    html.push_str(&page.body);
    html.push_str("</main>");

    html.push_str(&format!(
        "<footer>&copy; {} Sistema de Etiquetas</footer></body></html>",
        Utc::now().year()
    ));
    html
}

fn render_tabs(active: ActiveView, preview_enabled: bool) -> String {
    let class = |view: ActiveView| if view == active { "tab active" } else { "tab" };
    let preview = if preview_enabled {
        format!(
            r#"<a class="{}" href="/preview">Visualizar Etiqueta</a>"#,
            class(ActiveView::Preview)
        )
    } else {
        r#"<span class="tab disabled" aria-disabled="true">Visualizar Etiqueta</span>"#.to_string()
    };
    format!(
        r#"<nav class="tabs"><a class="{}" href="/">Formulário</a>{preview}</nav>"#,
        class(ActiveView::Edit)
    )
}

fn render_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="toasts" role="status">"#);
    for notification in notifications {
        let variant = match notification.variant {
            NotificationVariant::Default => "toast",
            NotificationVariant::Destructive => "toast destructive",
        };
        html.push_str(&format!(
            r#"<div class="{variant}"><strong>{}</strong><p>{}</p></div>"#,
            escape(&notification.title),
            escape(&notification.description)
        ));
    }
    html.push_str("</div>");
    html
}

const STYLESHEET: &str = "\
body { margin: 0; padding: 1rem; background: #f9fafb; font-family: Arial, sans-serif; display: flex; flex-direction: column; align-items: center; } \
header { text-align: center; max-width: 36rem; margin-bottom: 1rem; } \
header .brand { height: 40px; } \
h1 { color: #FF5500; font-size: 1.4rem; } \
main { width: 100%; max-width: 32rem; } \
footer { margin-top: 1rem; color: #6b7280; font-size: 0.75rem; } \
.tabs { display: grid; grid-template-columns: 1fr 1fr; margin-bottom: 1rem; background: #f3f4f6; border-radius: 6px; } \
.tab { padding: 0.5rem; text-align: center; color: #374151; text-decoration: none; } \
.tab.active { background: #fff; font-weight: bold; } \
.tab.disabled { opacity: 0.5; cursor: not-allowed; } \
.toasts { margin-bottom: 1rem; } \
.toast { border: 1px solid #e5e7eb; background: #fff; padding: 0.5rem 1rem; border-radius: 6px; margin-bottom: 0.5rem; } \
.toast.destructive { background: #ef4444; color: #fff; border-color: #ef4444; } \
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; } \
.fields { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; } \
.field { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem; } \
.field.wide { grid-column: span 2; } \
.field input { padding: 0.4rem; border: 1px solid #d1d5db; border-radius: 4px; } \
.actions { display: flex; gap: 0.5rem; } \
button { flex: 1; padding: 0.6rem; border-radius: 6px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; } \
button.primary { background: #FF5500; color: #fff; border-color: #FF5500; } \
button.primary:hover { background: #E34D00; } \
.formats { display: flex; gap: 1rem; margin-bottom: 1rem; font-size: 0.875rem; } \
.label { border: 1px solid #000; padding: 1rem; } \
.label .logo { display: flex; justify-content: center; margin-bottom: 1rem; } \
.label .logo img { height: 40px; } \
.label .section-title { font-weight: bold; font-size: 1.1rem; margin: 0.5rem 0; } \
.label table { width: 100%; border-collapse: collapse; } \
.label th, .label td { border: 1px solid #000; padding: 0.5rem; text-align: left; } \
.label th { background: #f3f4f6; } \
.barcode-container { display: flex; justify-content: center; margin-top: 1rem; }";
