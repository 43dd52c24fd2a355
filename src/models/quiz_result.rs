// src/models/quiz_result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;

/// Represents the 'quiz_results' table in the database.
/// `quiz_id` is a plain reference; nothing keeps it in sync with `quizzes`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: Uuid,

    pub quiz_id: Uuid,

    /// Selected option per question, `None` when unanswered.
    pub answers: Json<Vec<Option<i32>>>,

    /// Computed once at submission.
    pub score: i32,

    pub created_at: DateTime<Utc>,
}

/// A scored submission ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub quiz_id: Uuid,
    pub answers: Vec<Option<i32>>,
    pub score: i32,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub quiz_id: Uuid,

    /// Positional answers. Values are not range-checked.
    pub answers: Vec<Option<i32>>,
}

/// Per-question view of a result against the quiz as currently stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub index: usize,
    pub text: String,
    pub selected_option: Option<i32>,
    pub correct_option: i32,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBreakdown {
    pub result_id: Uuid,
    pub quiz_id: Uuid,
    /// Stored score, not recomputed.
    pub score: i32,
    pub total_questions: usize,
    pub percentage: u32,
    pub items: Vec<BreakdownItem>,
}
