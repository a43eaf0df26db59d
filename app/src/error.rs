//! FILENAME: app/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error(transparent)]
    Engine(#[from] engine::EngineError),

    #[error(transparent)]
    Persistence(#[from] persistence::PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
