use crate::{cache_manager::BlockSummary, startup::AppState};
use axum::{extract::State, Json};

/// Latest blocks, served from the cache.
pub async fn blocks(State(state): State<AppState>) -> Json<Vec<BlockSummary>> {
    Json(state.cache.blocks())
}
