// src/config.rs

use std::env;
use std::path::PathBuf;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub port: u16,
    /// Allowed CORS origins. An empty list allows any origin.
    pub cors_origins: Vec<String>,
    /// Built single-page client served for non-API paths.
    pub static_dir: Option<PathBuf>,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let static_dir = env::var("STATIC_DIR").ok().map(PathBuf::from);

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            rust_log,
            port,
            cors_origins,
            static_dir,
            log_dir,
        }
    }
}

/// Splits a comma-separated origin list. `*` anywhere means "any origin".
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.iter().any(|o| o == "*") {
        return Vec::new();
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("http://a.test, *").is_empty());
    }

    #[test]
    fn origins_are_trimmed() {
        assert_eq!(
            parse_origins(" http://a.test ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
