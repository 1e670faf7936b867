use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{RecommendationQuery, RecommendationResponse},
    services::Recommender,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommends electives for the student described in the request body
///
/// The payload is validated before the engine runs; the engine itself runs on
/// the blocking pool and a failure there surfaces as an opaque server error.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %request_id, error = %rejection, "Rejected request body");
        AppError::InvalidInput("Request body must be JSON".to_string())
    })?;

    let query = RecommendationQuery::from_payload(&payload).inspect_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Invalid recommendation request");
    })?;

    tracing::info!(
        request_id = %request_id,
        student_id = %query.student_id,
        history_count = query.history.len(),
        "Processing recommendation request"
    );

    let graph = Arc::clone(&state.graph);
    let response = tokio::task::spawn_blocking(move || Recommender::new(&graph).recommend(&query))
        .await
        .map_err(|e| AppError::Internal(format!("Recommendation task failed: {}", e)))?;

    tracing::info!(
        request_id = %request_id,
        recommended = response.recommendations.len(),
        total_credits = response.total_recommended_credits,
        "Recommendation completed"
    );

    Ok(Json(response))
}
