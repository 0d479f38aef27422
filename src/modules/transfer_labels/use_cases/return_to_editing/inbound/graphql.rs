use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ReturnToEditingMutation;

#[Object]
impl ReturnToEditingMutation {
    /// Leave the preview. The current record is kept.
    async fn return_to_editing(&self, context: &Context<'_>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .return_handler
            .handle(Utc::now().timestamp_millis())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
