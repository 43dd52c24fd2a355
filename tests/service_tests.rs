// tests/service_tests.rs

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use quiz_backend::{
    config::Config,
    error::AppError,
    models::{
        quiz::{CreateQuizRequest, Question, Quiz, QuizSummary},
        quiz_result::{NewQuizResult, QuizResult, SubmitQuizRequest},
    },
    routes,
    services::{QuizService, ResultService, quiz::DEFAULT_RECENT_LIMIT},
    state::AppState,
    store::{MemoryStore, Store},
};
use tower::ServiceExt;
use uuid::Uuid;

fn services(store: Arc<MemoryStore>) -> (QuizService, ResultService) {
    let quizzes = QuizService::new(store.clone());
    let results = ResultService::new(store, quizzes.clone());
    (quizzes, results)
}

fn quiz_request(title: &str, correct: &[i32]) -> CreateQuizRequest {
    CreateQuizRequest {
        title: title.to_string(),
        description: Some("D".to_string()),
        questions: correct
            .iter()
            .enumerate()
            .map(|(i, &correct_option)| Question {
                text: format!("Q{}", i + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_option,
            })
            .collect(),
    }
}

#[tokio::test]
async fn create_then_get_returns_equal_record() {
    let (quizzes, _) = services(Arc::new(MemoryStore::new()));
    let req = quiz_request("T", &[1]);

    let created = quizzes.create(&req).await.unwrap();
    let fetched = quizzes.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "T");
    assert_eq!(fetched.description.as_deref(), Some("D"));
    assert_eq!(fetched.questions.0, req.questions);
}

#[tokio::test]
async fn submit_scores_positional_matches() {
    let (quizzes, results) = services(Arc::new(MemoryStore::new()));
    let quiz = quizzes.create(&quiz_request("T", &[0, 2, 1])).await.unwrap();

    let result = results
        .submit(SubmitQuizRequest {
            quiz_id: quiz.id,
            answers: vec![Some(0), Some(2), Some(0)],
        })
        .await
        .unwrap();

    assert_eq!(result.score, 2);
    assert_eq!(results.get(result.id).await.unwrap(), result);
}

#[tokio::test]
async fn submit_for_missing_quiz_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let (_, results) = services(store.clone());

    let err = results
        .submit(SubmitQuizRequest {
            quiz_id: Uuid::new_v4(),
            answers: vec![Some(0)],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.result_count().await, 0);
}

#[tokio::test]
async fn identical_submissions_create_distinct_results() {
    let store = Arc::new(MemoryStore::new());
    let (quizzes, results) = services(store.clone());
    let quiz = quizzes.create(&quiz_request("T", &[0])).await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let result = results
            .submit(SubmitQuizRequest {
                quiz_id: quiz.id,
                answers: vec![Some(0)],
            })
            .await
            .unwrap();
        assert_eq!(result.score, 1);
        ids.push(result.id);
    }

    assert_ne!(ids[0], ids[1]);
    assert_eq!(store.result_count().await, 2);
}

#[tokio::test]
async fn list_recent_respects_limit_and_order() {
    let (quizzes, _) = services(Arc::new(MemoryStore::new()));
    for i in 0..15 {
        quizzes.create(&quiz_request(&format!("Quiz {}", i), &[0, 1])).await.unwrap();
    }

    let recent = quizzes.list_recent(DEFAULT_RECENT_LIMIT).await.unwrap();
    assert_eq!(recent.len(), 10);
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(recent[0].title, "Quiz 14");
    assert!(recent.iter().all(|q| q.question_count == 2));

    assert_eq!(quizzes.list_recent(3).await.unwrap().len(), 3);
}

#[tokio::test]
async fn get_unknown_result_is_not_found() {
    let (_, results) = services(Arc::new(MemoryStore::new()));
    let err = results.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "Result not found"));
}

#[tokio::test]
async fn breakdown_of_result_whose_quiz_is_gone() {
    // Results hold a plain quiz id, so one can point at nothing.
    let store = Arc::new(MemoryStore::new());
    let (_, results) = services(store.clone());
    let orphan = store
        .insert_result(&NewQuizResult {
            quiz_id: Uuid::new_v4(),
            answers: vec![Some(1)],
            score: 1,
        })
        .await
        .unwrap();

    assert_eq!(results.get(orphan.id).await.unwrap().score, 1);
    let err = results.breakdown(orphan.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "Quiz not found"));
}

#[tokio::test]
async fn breakdown_handles_short_answers() {
    let (quizzes, results) = services(Arc::new(MemoryStore::new()));
    let quiz = quizzes.create(&quiz_request("T", &[0, 2, 1])).await.unwrap();
    let result = results
        .submit(SubmitQuizRequest {
            quiz_id: quiz.id,
            answers: vec![Some(0)],
        })
        .await
        .unwrap();

    let breakdown = results.breakdown(result.id).await.unwrap();
    assert_eq!(breakdown.score, 1);
    assert_eq!(breakdown.total_questions, 3);
    assert_eq!(breakdown.percentage, 33);
    assert!(breakdown.items[0].is_correct);
    assert_eq!(breakdown.items[1].selected_option, None);
    assert!(!breakdown.items[2].is_correct);
}

/// Store whose every call fails, as an unreachable database would.
struct FailingStore;

fn unavailable() -> AppError {
    AppError::InternalServerError("connection refused".to_string())
}

#[async_trait]
impl Store for FailingStore {
    async fn insert_quiz(&self, _: &CreateQuizRequest) -> Result<Quiz, AppError> {
        Err(unavailable())
    }

    async fn find_quiz(&self, _: Uuid) -> Result<Option<Quiz>, AppError> {
        Err(unavailable())
    }

    async fn recent_quizzes(&self, _: i64) -> Result<Vec<QuizSummary>, AppError> {
        Err(unavailable())
    }

    async fn insert_result(&self, _: &NewQuizResult) -> Result<QuizResult, AppError> {
        Err(unavailable())
    }

    async fn find_result(&self, _: Uuid) -> Result<Option<QuizResult>, AppError> {
        Err(unavailable())
    }

    async fn close(&self) {}
}

#[tokio::test]
async fn store_failure_returns_generic_500() {
    let config = Config {
        database_url: None,
        rust_log: "error".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        static_dir: None,
        log_dir: "logs".to_string(),
    };
    let app = routes::create_router(AppState::new(Arc::new(FailingStore), config));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/quizzes/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Internal Server Error");
}
