//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
