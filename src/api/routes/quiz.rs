//! Quiz routes - keyword and problem generation

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::api::dto::{error_response, ApiError};
use crate::api::AppState;
use crate::application::quiz::{
    GenerateKeywords, GenerateProblem, GenerateProblemError, GenerateProblemInput,
};
use crate::domain::entities::{KeywordList, Problem};

#[derive(Debug, Default, Deserialize)]
pub struct ProblemRequest {
    #[serde(default)]
    pub keyword: Option<String>,
}

/// GET /api/keywords - Keywords for the main menu
pub async fn get_keywords(State(state): State<Arc<AppState>>) -> Json<KeywordList> {
    let use_case = GenerateKeywords::new(state.quiz_generator.clone());
    Json(use_case.execute().await)
}

/// POST /api/problem - Right/wrong paragraph pair for a keyword
pub async fn create_problem(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProblemRequest>, JsonRejection>,
) -> Result<Json<Problem>, ApiError> {
    // Unreadable bodies carry no keyword either
    let Json(body) = payload.map_err(|rejection| {
        error_response(
            StatusCode::BAD_REQUEST,
            "MISSING_KEYWORD",
            "keyword is required",
            Some(rejection.body_text()),
        )
    })?;

    let use_case = GenerateProblem::new(state.quiz_generator.clone());

    let problem = use_case
        .execute(GenerateProblemInput {
            keyword: body.keyword,
        })
        .await
        .map_err(|e| match e {
            GenerateProblemError::MissingKeyword => error_response(
                StatusCode::BAD_REQUEST,
                "MISSING_KEYWORD",
                "keyword is required",
                None,
            ),
        })?;

    Ok(Json(problem))
}
