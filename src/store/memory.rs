// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Store;
use crate::{
    error::AppError,
    models::{
        quiz::{CreateQuizRequest, Quiz, QuizSummary},
        quiz_result::{NewQuizResult, QuizResult},
    },
};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    quizzes: HashMap<Uuid, Quiz>,
    /// Quiz ids in insertion order.
    quiz_order: Vec<Uuid>,
    results: HashMap<Uuid, QuizResult>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn result_count(&self) -> usize {
        self.inner.read().await.results.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_quiz(&self, quiz: &CreateQuizRequest) -> Result<Quiz, AppError> {
        let quiz = Quiz {
            id: Uuid::new_v4(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            questions: Json(quiz.questions.clone()),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.quiz_order.push(quiz.id);
        inner.quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn find_quiz(&self, id: Uuid) -> Result<Option<Quiz>, AppError> {
        Ok(self.inner.read().await.quizzes.get(&id).cloned())
    }

    async fn recent_quizzes(&self, limit: i64) -> Result<Vec<QuizSummary>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let inner = self.inner.read().await;

        // Newest insertion first, so the stable sort breaks timestamp ties the same way.
        let mut quizzes: Vec<&Quiz> = inner
            .quiz_order
            .iter()
            .rev()
            .filter_map(|id| inner.quizzes.get(id))
            .collect();
        quizzes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(quizzes
            .into_iter()
            .take(limit)
            .map(QuizSummary::from)
            .collect())
    }

    async fn insert_result(&self, result: &NewQuizResult) -> Result<QuizResult, AppError> {
        let result = QuizResult {
            id: Uuid::new_v4(),
            quiz_id: result.quiz_id,
            answers: Json(result.answers.clone()),
            score: result.score,
            created_at: Utc::now(),
        };

        self.inner
            .write()
            .await
            .results
            .insert(result.id, result.clone());
        Ok(result)
    }

    async fn find_result(&self, id: Uuid) -> Result<Option<QuizResult>, AppError> {
        Ok(self.inner.read().await.results.get(&id).cloned())
    }

    async fn close(&self) {
        tracing::info!("In-memory store closed.");
    }
}
