// src/handlers/mod.rs

use uuid::Uuid;

use crate::error::AppError;

pub mod quiz;
pub mod result;

/// A path id that is not a UUID cannot name any record.
fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}
