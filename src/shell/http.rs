use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::transfer_labels::use_cases::preview_label::inbound::http as preview_http;
use crate::modules::transfer_labels::use_cases::print_label::inbound::http as print_http;
use crate::modules::transfer_labels::use_cases::return_to_editing::inbound::http as return_http;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::inbound::http as submit_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/", get(submit_http::show))
        .route("/transfer-form", post(submit_http::handle))
        .route("/preview", get(preview_http::handle))
        .route("/back", post(return_http::handle))
        .route("/print", get(print_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
