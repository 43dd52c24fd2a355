// src/services/scoring.rs

use crate::models::quiz::Question;

/// Counts positions where the submitted answer equals the correct option.
///
/// Walks the questions and indexes into `answers`: a missing or unanswered
/// position never matches, and answers past the last question are ignored.
pub fn score(questions: &[Question], answers: &[Option<i32>]) -> i32 {
    questions
        .iter()
        .enumerate()
        .filter(|(i, question)| is_correct(question, answers.get(*i).copied().flatten()))
        .count() as i32
}

/// Strict equality between a selected option and the answer key.
pub fn is_correct(question: &Question, selected: Option<i32>) -> bool {
    selected == Some(question.correct_option)
}
