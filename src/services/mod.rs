// src/services/mod.rs

pub mod quiz;
pub mod result;
pub mod scoring;

pub use quiz::QuizService;
pub use result::ResultService;
