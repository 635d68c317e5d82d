use axum::{http::StatusCode, response::IntoResponse};

use crate::utils::success_to_api_response;

use super::model::HealthResponse;

#[axum::debug_handler]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        success_to_api_response(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
