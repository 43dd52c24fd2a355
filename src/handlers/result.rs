// src/handlers/result.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use super::parse_id;
use crate::{
    error::AppError,
    models::quiz_result::SubmitQuizRequest,
    services::ResultService,
};

/// Submits answers for a quiz and stores the scored result.
///
/// * 404 if the quiz does not exist (nothing is stored).
/// * 201 Created with the full result otherwise.
pub async fn submit_quiz(
    State(results): State<ResultService>,
    payload: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let result = results.submit(payload).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn get_result(
    State(results): State<ResultService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Result not found")?;
    let result = results.get(id).await?;

    Ok(Json(result))
}

/// Per-question view of a result, for the results page.
pub async fn get_result_breakdown(
    State(results): State<ResultService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Result not found")?;
    let breakdown = results.breakdown(id).await?;

    Ok(Json(breakdown))
}
