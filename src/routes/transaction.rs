use crate::{error_fmt::error_chain_fmt, explorer_client::ExplorerError, startup::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, value::RawValue};
use std::fmt::Debug;
use tracing::instrument;

#[derive(thiserror::Error)]
pub enum TransactionError {
    #[error("Transaction fetch failed")]
    FetchFailed(#[from] ExplorerError),
}

impl Debug for TransactionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        tracing::error!(error.cause_chain = ?self, "failed to fetch transaction from explorer");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Live lookup of a single transaction. The cache is never consulted nor updated.
#[instrument(name = "Fetching transaction", skip(state))]
pub async fn transaction(
    State(state): State<AppState>,
    Path(txid): Path<String>,
) -> Result<Json<Box<RawValue>>, TransactionError> {
    let transaction = state.explorer.transaction(&txid).await?;
    Ok(Json(transaction))
}
