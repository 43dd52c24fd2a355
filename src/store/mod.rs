// src/store/mod.rs

//! Persistence for quizzes and results.
//!
//! Two independent collections keyed by generated UUIDs. A result refers to
//! its quiz by id only; no store enforces that the quiz exists.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        quiz::{CreateQuizRequest, Quiz, QuizSummary},
        quiz_result::{NewQuizResult, QuizResult},
    },
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Handle to the backing store, shared by every service.
///
/// Each call is a single-record read or write; atomicity beyond one record is
/// not provided.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persists a quiz, generating its id and creation timestamp.
    async fn insert_quiz(&self, quiz: &CreateQuizRequest) -> Result<Quiz, AppError>;

    async fn find_quiz(&self, id: Uuid) -> Result<Option<Quiz>, AppError>;

    /// Newest first, at most `limit` entries.
    async fn recent_quizzes(&self, limit: i64) -> Result<Vec<QuizSummary>, AppError>;

    /// Persists a scored submission, generating its id and creation timestamp.
    async fn insert_result(&self, result: &NewQuizResult) -> Result<QuizResult, AppError>;

    async fn find_result(&self, id: Uuid) -> Result<Option<QuizResult>, AppError>;

    /// Releases underlying resources. Further calls may fail.
    async fn close(&self);
}
