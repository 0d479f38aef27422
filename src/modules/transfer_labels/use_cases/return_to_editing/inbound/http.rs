use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use chrono::Utc;

use crate::shell::state::AppState;

/// POST `/back`.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state
        .return_handler
        .handle(Utc::now().timestamp_millis())
        .await
    {
        Ok(_) => Redirect::to("/").into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod return_to_editing_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use tower::ServiceExt;

    use crate::modules::transfer_labels::core::state::ActiveView;
    use crate::shell::config::Config;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::submit_transfer_form::SubmitTransferFormBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/back", post(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_redirect_to_the_form_and_keep_the_record() {
        let state = AppState::in_memory(Config::default());
        state
            .submit_handler
            .handle(SubmitTransferFormBuilder::new().build())
            .await
            .unwrap();

        let response = app(state.clone())
            .oneshot(Request::post("/back").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let session = state.queries.current_state().await.unwrap();
        assert_eq!(session.active_view(), ActiveView::Edit);
        assert!(session.current_record().is_some());
    }

    #[tokio::test]
    async fn it_should_redirect_even_without_a_record() {
        let response = app(AppState::in_memory(Config::default()))
            .oneshot(Request::post("/back").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
