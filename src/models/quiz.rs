// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

/// One multiple-choice item, embedded in a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,

    /// Choice labels, in display order.
    pub options: Vec<String>,

    /// Index into `options`.
    pub correct_option: i32,
}

/// Represents the 'quizzes' table in the database.
/// The full record is returned to quiz takers, answer key included.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    /// Ordered questions. Answers are matched to them by position.
    /// Stored as a JSON array in the database.
    pub questions: Json<Vec<Question>>,

    pub created_at: DateTime<Utc>,
}

/// Reduced projection used by the recent-quizzes listing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            question_count: quiz.questions.len() as i64,
            created_at: quiz.created_at,
        }
    }
}

/// DTO for creating a new quiz.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."),
        custom(function = validate_not_blank)
    )]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters."))]
    pub description: Option<String>,

    #[validate(
        length(min = 1, message = "A quiz needs at least one question."),
        custom(function = validate_questions)
    )]
    pub questions: Vec<Question>,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_questions(questions: &[Question]) -> Result<(), validator::ValidationError> {
    for question in questions {
        if validate_not_blank(&question.text).is_err() {
            return Err(validator::ValidationError::new("question_text_empty"));
        }
        if question.options.len() < 2 {
            return Err(validator::ValidationError::new("too_few_options"));
        }
        if question.options.iter().any(|opt| opt.chars().count() > 500) {
            return Err(validator::ValidationError::new("option_too_long"));
        }
        let in_range = usize::try_from(question.correct_option)
            .is_ok_and(|idx| idx < question.options.len());
        if !in_range {
            return Err(validator::ValidationError::new("correct_option_out_of_range"));
        }
    }
    Ok(())
}
