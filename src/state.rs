use std::sync::Arc;

use crate::config::Config;
use crate::services::{QuizService, ResultService};
use crate::store::Store;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub quizzes: QuizService,
    pub results: ResultService,
    pub config: Config,
}

impl AppState {
    /// Wires both services onto one store handle.
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        let quizzes = QuizService::new(store.clone());
        let results = ResultService::new(store, quizzes.clone());
        Self {
            quizzes,
            results,
            config,
        }
    }
}

impl FromRef<AppState> for QuizService {
    fn from_ref(state: &AppState) -> Self {
        state.quizzes.clone()
    }
}

impl FromRef<AppState> for ResultService {
    fn from_ref(state: &AppState) -> Self {
        state.results.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
