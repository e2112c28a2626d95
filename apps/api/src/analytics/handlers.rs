use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::analytics::ResumeStats;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrackActionRequest {
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct TrackActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: ResumeStats,
}

/// POST /api/resume-analytics
pub async fn handle_track_action(
    State(state): State<AppState>,
    Json(req): Json<TrackActionRequest>,
) -> Result<Json<TrackActionResponse>, AppError> {
    state.analytics.record_action(&req.action).await?;
    Ok(Json(TrackActionResponse {
        success: true,
        message: "Action tracked".to_string(),
    }))
}

/// GET /api/resume-stats
pub async fn handle_get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let data = state.analytics.get_stats().await?;
    Ok(Json(StatsResponse {
        success: true,
        data,
    }))
}
