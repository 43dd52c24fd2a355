// src/services/quiz.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppError,
    models::quiz::{CreateQuizRequest, Quiz, QuizSummary},
    store::Store,
};

/// Number of entries returned by the recent-quizzes listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn Store>,
}

impl QuizService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Persists a validated quiz and returns it with its generated id and timestamp.
    pub async fn create(&self, req: &CreateQuizRequest) -> Result<Quiz, AppError> {
        let quiz = self.store.insert_quiz(req).await?;
        tracing::info!(quiz_id = %quiz.id, questions = quiz.questions.len(), "Quiz created");
        Ok(quiz)
    }

    /// Full record, answer key included.
    pub async fn get(&self, id: Uuid) -> Result<Quiz, AppError> {
        self.store
            .find_quiz(id)
            .await?
            .ok_or(AppError::NotFound("Quiz not found".to_string()))
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<QuizSummary>, AppError> {
        self.store.recent_quizzes(limit).await
    }
}
