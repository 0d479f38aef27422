use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::transfer_labels::use_cases::preview_label::inbound::graphql::TransferSessionQuery;
use crate::modules::transfer_labels::use_cases::print_label::inbound::graphql::PrintLabelMutation;
use crate::modules::transfer_labels::use_cases::return_to_editing::inbound::graphql::ReturnToEditingMutation;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::inbound::graphql::SubmitTransferFormMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TransferSessionQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    SubmitTransferFormMutation,
    ReturnToEditingMutation,
    PrintLabelMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
