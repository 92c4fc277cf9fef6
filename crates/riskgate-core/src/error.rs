//! Error types for riskgate core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
