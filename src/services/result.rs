// src/services/result.rs

use std::sync::Arc;

use uuid::Uuid;

use super::{QuizService, scoring};
use crate::{
    error::AppError,
    models::quiz_result::{
        BreakdownItem, NewQuizResult, QuizResult, ResultBreakdown, SubmitQuizRequest,
    },
    store::Store,
};

#[derive(Clone)]
pub struct ResultService {
    store: Arc<dyn Store>,
    quizzes: QuizService,
}

impl ResultService {
    pub fn new(store: Arc<dyn Store>, quizzes: QuizService) -> Self {
        Self { store, quizzes }
    }

    /// Scores the answers against the referenced quiz and stores the result.
    ///
    /// * Fails with `NotFound` before any write if the quiz does not exist.
    /// * Every call creates a new result; identical submissions are not merged.
    pub async fn submit(&self, req: SubmitQuizRequest) -> Result<QuizResult, AppError> {
        let quiz = self.quizzes.get(req.quiz_id).await?;

        let score = scoring::score(&quiz.questions, &req.answers);

        let result = self
            .store
            .insert_result(&NewQuizResult {
                quiz_id: req.quiz_id,
                answers: req.answers,
                score,
            })
            .await?;

        tracing::info!(result_id = %result.id, quiz_id = %result.quiz_id, score, "Quiz submitted");
        Ok(result)
    }

    pub async fn get(&self, id: Uuid) -> Result<QuizResult, AppError> {
        self.store
            .find_result(id)
            .await?
            .ok_or(AppError::NotFound("Result not found".to_string()))
    }

    /// Per-question correctness of a stored result.
    ///
    /// Compared against the quiz as it is now, while `score` stays the value
    /// recorded at submission.
    pub async fn breakdown(&self, id: Uuid) -> Result<ResultBreakdown, AppError> {
        let result = self.get(id).await?;
        let quiz = self.quizzes.get(result.quiz_id).await?;

        let items: Vec<BreakdownItem> = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected_option = result.answers.get(index).copied().flatten();
                BreakdownItem {
                    index,
                    text: question.text.clone(),
                    selected_option,
                    correct_option: question.correct_option,
                    is_correct: scoring::is_correct(question, selected_option),
                }
            })
            .collect();

        let total_questions = items.len();

        Ok(ResultBreakdown {
            result_id: result.id,
            quiz_id: result.quiz_id,
            score: result.score,
            total_questions,
            percentage: percentage(result.score, total_questions),
            items,
        })
    }
}

/// Rounded share of correct answers, 0 for an empty quiz.
fn percentage(score: i32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score.max(0) as f64 / total as f64) * 100.0).round() as u32
}
