// src/routes.rs

use std::path::Path;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{quiz, result},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz and quiz-result endpoints under `/api`.
/// * Serves the built client from `STATIC_DIR` for every other path, if configured.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let quiz_routes = Router::new()
        .route("/quizzes", post(quiz::create_quiz))
        .route("/quizzes/recent", get(quiz::list_recent))
        .route("/quizzes/{id}", get(quiz::get_quiz));

    let result_routes = Router::new()
        .route("/quiz-results", post(result::submit_quiz))
        .route("/quiz-results/{id}", get(result::get_result))
        .route("/quiz-results/{id}/breakdown", get(result::get_result_breakdown));

    let api_routes = Router::new()
        .merge(quiz_routes)
        .merge(result_routes)
        // Unknown API paths must not fall through to the client bundle
        .fallback(api_not_found);

    let mut app = Router::new().nest("/api", api_routes);

    if let Some(dir) = &state.config.static_dir {
        app = app.fallback_service(client_service(dir));
    }

    app
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Static files, with `index.html` answering client-side routes.
fn client_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
