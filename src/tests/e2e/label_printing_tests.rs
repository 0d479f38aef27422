use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::modules::transfer_labels::barcode::BarcodeOptions;
use crate::modules::transfer_labels::barcode::code128::Code128;
use crate::modules::transfer_labels::use_cases::print_label::composer::BarcodeFailurePolicy;
use crate::shell::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::submit_transfer_form::SubmitTransferFormBuilder;

async fn app_with_record(config: Config, builder: SubmitTransferFormBuilder) -> (AppState, Router) {
    let state = AppState::in_memory(config);
    state.submit_handler.handle(builder.build()).await.unwrap();
    let app = router(state.clone());
    (state, app)
}

fn svg_attribute(tag: &str, name: &str) -> f64 {
    let key = format!(r#" {name}=""#);
    let start = tag.find(&key).unwrap() + key.len();
    let end = start + tag[start..].find('"').unwrap();
    tag[start..end].parse().unwrap()
}

/// Rebuilds the module sequence from the bars drawn in `<svg id="{id}">`.
fn drawn_modules(html: &str, id: &str, options: &BarcodeOptions) -> Vec<bool> {
    let svg = &html[html.find(&format!(r#"<svg id="{id}""#)).unwrap()..];
    let bars = &svg[svg.find(r##"<g style="fill:#000000;">"##).unwrap()..];
    let bars = &bars[..bars.find("</g>").unwrap()];

    let mut modules = Vec::new();
    for rect in bars.split("<rect ").skip(1) {
        let rect = format!(" {rect}");
        let from = (svg_attribute(&rect, "x") - options.margin as f64) / options.width;
        let span = svg_attribute(&rect, "width") / options.width;
        modules.resize(from.round() as usize, false);
        modules.extend(std::iter::repeat_n(true, span.round() as usize));
    }
    modules
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[rstest]
#[case("/print?format=label", "size: 100mm 150mm;", "size: A4;")]
#[case("/print?format=a4", "size: A4;", "size: 100mm 150mm;")]
#[tokio::test]
async fn it_should_never_mix_page_geometries(
    #[case] uri: &str,
    #[case] expected: &str,
    #[case] other: &str,
) {
    let (_, app) = app_with_record(Config::default(), SubmitTransferFormBuilder::new()).await;

    let (status, html) = get_text(&app, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(expected));
    assert!(!html.contains(other));
}

#[tokio::test]
async fn it_should_still_print_after_a_barcode_failure_in_scenario_d() {
    let (_, app) = app_with_record(
        Config::default(),
        SubmitTransferFormBuilder::new().transaction_link("http://x/ação"),
    )
    .await;

    let (status, html) = get_text(&app, "/print").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"id="barcode-wrapper"><p>Erro ao gerar código de barras: "#));
    assert!(html.contains("window.print()"));
}

#[tokio::test]
async fn it_should_abort_the_print_when_configured() {
    let config = Config {
        barcode_failure_policy: BarcodeFailurePolicy::Abort,
        ..Config::default()
    };
    let (_, app) = app_with_record(
        config,
        SubmitTransferFormBuilder::new().transaction_link("ação"),
    )
    .await;

    let (_, html) = get_text(&app, "/print").await;

    assert!(!html.contains("window.print()"));
}

#[rstest]
#[case("http://x/1")]
#[case("https://erp.example.com/transfers/0012345678?tab=items")]
#[case("ID:987654321")]
#[tokio::test]
async fn it_should_encode_the_transaction_link_exactly(#[case] link: &str) {
    let (state, app) = app_with_record(
        Config::default(),
        SubmitTransferFormBuilder::new().transaction_link(link),
    )
    .await;

    let session = state.queries.current_state().await.unwrap();
    let value = &session.current_record().unwrap().transaction_link;
    let symbol = Code128::encode(value).unwrap();
    assert_eq!(Code128::decode(symbol.symbols()).unwrap(), link);
    assert_eq!(Code128::decode_modules(&symbol.modules()).unwrap(), link);

    let (_, html) = get_text(&app, "/print").await;
    assert!(html.contains(&format!(">{}</text>", crate::shared::core::html::escape(link))));
    let drawn = drawn_modules(&html, "barcode", &BarcodeOptions::print());
    assert_eq!(drawn, symbol.modules());
    assert_eq!(Code128::decode_modules(&drawn).unwrap(), link);
}

#[tokio::test]
async fn it_should_reject_print_while_the_session_is_empty() {
    let app = router(AppState::in_memory(Config::default()));
    let (status, _) = get_text(&app, "/print").await;
    assert_eq!(status, StatusCode::CONFLICT);
}
