use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

pub const ENDPOINTS: [&str; 3] = ["/blocks", "/mempool", "/tx/:id"];

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: String,
    pub endpoints: Vec<&'static str>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "running",
        service: state.service_name.to_string(),
        endpoints: ENDPOINTS.to_vec(),
    })
}
