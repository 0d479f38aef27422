use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::transfer_labels::use_cases::preview_label::label_view::LabelView;
use crate::modules::transfer_labels::use_cases::preview_label::render::render_label_preview;
use crate::modules::transfer_labels::use_cases::submit_transfer_form::inbound::graphql::GqlTransferRecord;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct TransferSessionQuery;

#[Object]
impl TransferSessionQuery {
    async fn current_transfer_record(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Option<GqlTransferRecord>> {
        let state = context.data_unchecked::<AppState>();
        let session = state.queries.current_state().await?;
        Ok(session.current_record().map(GqlTransferRecord::from))
    }

    /// `form` or `preview`.
    async fn active_view(&self, context: &Context<'_>) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let session = state.queries.current_state().await?;
        Ok(session.active_view().as_str().to_string())
    }

    /// On-screen label fragment for the current record.
    async fn label_preview(
        &self,
        context: &Context<'_>,
        quantity_pieces: Option<String>,
        invoice_number: Option<String>,
    ) -> GqlResult<Option<String>> {
        let state = context.data_unchecked::<AppState>();
        let session = state.queries.current_state().await?;
        let Some(record) = session.current_record() else {
            return Ok(None);
        };
        let extension = state.label_extension(quantity_pieces, invoice_number);
        let view = LabelView::project(record, &extension, state.config.logo_url.as_str());
        Ok(Some(
            render_label_preview(&view, state.barcode_renderer.as_ref()).await,
        ))
    }
}
