// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use super::parse_id;
use crate::{
    error::AppError,
    models::quiz::CreateQuizRequest,
    services::{QuizService, quiz::DEFAULT_RECENT_LIMIT},
};

/// Lists the most recently created quizzes, newest first.
/// Question bodies are replaced by `questionCount`.
pub async fn list_recent(State(quizzes): State<QuizService>) -> Result<impl IntoResponse, AppError> {
    let recent = quizzes.list_recent(DEFAULT_RECENT_LIMIT).await?;
    Ok(Json(recent))
}

/// Creates a quiz.
///
/// Returns 201 Created and the full record with its generated id.
pub async fn create_quiz(
    State(quizzes): State<QuizService>,
    payload: Result<Json<CreateQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let quiz = quizzes.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Retrieves a single quiz by ID, correct options included.
pub async fn get_quiz(
    State(quizzes): State<QuizService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Quiz not found")?;
    let quiz = quizzes.get(id).await?;

    Ok(Json(quiz))
}
