//! Ranking routes - top-10 board of fastest perfect rounds

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::dto::{error_response, ApiError};
use crate::api::AppState;
use crate::application::ranking::{
    ListRankings, SubmitRanking, SubmitRankingError, SubmitRankingInput,
};
use crate::domain::entities::Ranking;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitRankingRequest {
    pub nickname: Option<String>,
    pub keyword: Option<String>,
    pub elapsed_time: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SubmitRankingResponse {
    pub status: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/rankings - Store a ranking, keeping the 10 fastest
pub async fn submit_ranking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitRankingRequest>, JsonRejection>,
) -> Result<Json<SubmitRankingResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_RANKING",
            "Invalid request body",
            Some(rejection.body_text()),
        )
    })?;

    let (Some(nickname), Some(keyword), Some(elapsed_time)) =
        (body.nickname, body.keyword, body.elapsed_time)
    else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_RANKING",
            "nickname, keyword and elapsed_time are required",
            None,
        ));
    };

    let use_case = SubmitRanking::new(state.ranking_repo.clone());
    use_case
        .execute(SubmitRankingInput {
            nickname,
            keyword,
            elapsed_time,
        })
        .await
        .map_err(|e| match e {
            SubmitRankingError::Validation(msg) => error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_RANKING",
                &msg,
                None,
            ),
            SubmitRankingError::Repository(e) => {
                tracing::error!("Failed to store ranking: {}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RANKING_ERROR",
                    "Failed to store ranking",
                    Some(e.to_string()),
                )
            }
        })?;

    Ok(Json(SubmitRankingResponse {
        status: "ok".to_string(),
    }))
}

/// GET /api/rankings - Fastest rankings first
pub async fn list_rankings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ranking>>, ApiError> {
    let use_case = ListRankings::new(state.ranking_repo.clone());
    let rankings = use_case.execute().await.map_err(|e| {
        tracing::error!("Failed to list rankings: {}", e);
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "RANKING_ERROR",
            "Failed to list rankings",
            Some(e.to_string()),
        )
    })?;

    Ok(Json(rankings))
}
