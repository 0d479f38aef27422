use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::modules::transfer_labels::core::labels;
use crate::modules::transfer_labels::core::record::TransferField;
use crate::modules::transfer_labels::core::state::ActiveView;
use crate::modules::transfer_labels::use_cases::errors::ApplicationError;
use crate::shell::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::submit_transfer_form::SubmitTransferFormBuilder;

const SCENARIO_A: &str = "transactionNumber=T1&ticketNumber=TK1&volume=10&sourceCD=CD01&destinationCD=CD02&transactionLink=http%3A%2F%2Fx%2F1";

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::post("/transfer-form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn it_should_accept_scenario_a_and_preview_it_without_a_sap_row() {
    let state = AppState::in_memory(Config::default());
    let app = router(state.clone());

    let response = send(&app, post_form(SCENARIO_A)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = text(send(&app, get("/preview")).await).await;
    for value in ["T1", "TK1", "10", "CD01", "CD02"] {
        assert!(html.contains(&format!("<td>{value}</td>")), "missing {value}");
    }
    assert!(!html.contains(labels::SAP_ORDER));
    assert!(html.contains(">http://x/1</text>"));

    let session = state.queries.current_state().await.unwrap();
    let record = session.current_record().unwrap();
    assert_eq!(record.sap_transfer_order, "");
    assert_eq!(record.transaction_link, "http://x/1");
}

#[tokio::test]
async fn it_should_reject_scenario_b_with_only_volume_missing() {
    let state = AppState::in_memory(Config::default());

    let result = state
        .submit_handler
        .handle(SubmitTransferFormBuilder::new().volume("").build())
        .await;

    match result {
        Err(ApplicationError::Validation(reason)) => {
            assert_eq!(reason.missing_field_names(), vec!["volume"]);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    let session = state.queries.current_state().await.unwrap();
    assert!(session.current_record().is_none());
}

#[tokio::test]
async fn it_should_show_the_sap_row_for_scenario_c() {
    let app = router(AppState::in_memory(Config::default()));

    send(&app, post_form(&format!("{SCENARIO_A}&sapTransferOrder=SAP-99"))).await;

    let preview = text(send(&app, get("/preview")).await).await;
    let print = text(send(&app, get("/print")).await).await;
    for html in [preview, print] {
        assert_eq!(
            html.matches(&format!("<th>{}</th><td>SAP-99</td>", labels::SAP_ORDER)).count(),
            1
        );
    }
}

#[rstest]
#[case(TransferField::TransactionNumber)]
#[case(TransferField::TicketNumber)]
#[case(TransferField::Volume)]
#[case(TransferField::SourceCd)]
#[case(TransferField::DestinationCd)]
#[case(TransferField::TransactionLink)]
#[tokio::test]
async fn it_should_keep_the_previous_record_when_a_later_submission_fails(
    #[case] field: TransferField,
) {
    let state = AppState::in_memory(Config::default());
    let first = state
        .submit_handler
        .handle(SubmitTransferFormBuilder::new().build())
        .await
        .unwrap();

    let result = state
        .submit_handler
        .handle(
            SubmitTransferFormBuilder::new()
                .transaction_number("T2")
                .clear(field)
                .build(),
        )
        .await;

    assert!(matches!(result, Err(ApplicationError::Validation(_))));
    let session = state.queries.current_state().await.unwrap();
    assert_eq!(session.current_record(), Some(&first));
}

#[tokio::test]
async fn it_should_go_back_to_a_blank_form_with_the_preview_tab_still_reachable() {
    let state = AppState::in_memory(Config::default());
    let app = router(state.clone());
    send(&app, post_form(SCENARIO_A)).await;

    let response = send(
        &app,
        Request::post("/back").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.headers()[header::LOCATION], "/");

    let html = text(send(&app, get("/")).await).await;
    assert!(html.contains(r#"name="transactionNumber" value="""#));
    assert!(html.contains(r#"href="/preview">Visualizar Etiqueta</a>"#));

    let session = state.queries.current_state().await.unwrap();
    assert_eq!(session.active_view(), ActiveView::Edit);

    let response = send(&app, get("/preview")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn it_should_keep_values_verbatim() {
    let app = router(AppState::in_memory(Config::default()));
    send(
        &app,
        post_form("transactionNumber=+t-001+&ticketNumber=TK1&volume=10+KG&sourceCD=cd01&destinationCD=CD02&transactionLink=http%3A%2F%2Fx%2F1"),
    )
    .await;

    let html = text(send(&app, get("/preview")).await).await;
    assert!(html.contains("<td> t-001 </td>"));
    assert!(html.contains("<td>10 KG</td>"));
    assert!(html.contains("<td>cd01</td>"));
}
