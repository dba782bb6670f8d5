use crate::{cache_manager::MempoolEntry, startup::AppState};
use axum::{extract::State, Json};

/// Recent mempool transactions, served from the cache.
pub async fn mempool(State(state): State<AppState>) -> Json<Vec<MempoolEntry>> {
    Json(state.cache.mempool())
}
