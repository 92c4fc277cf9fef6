//! Engine error types

use thiserror::Error;

/// Engine error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Field path has no registered accessor (direct lookup)
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// A rule's condition references an unmapped field path
    #[error("Unknown field path '{field}' in rule '{rule_id}'")]
    UnknownField { rule_id: String, field: String },

    /// Expected value or operator does not fit the field's type
    #[error("Malformed condition in rule '{rule_id}', field '{field}': {reason} (value '{value}')")]
    MalformedCondition {
        rule_id: String,
        field: String,
        value: String,
        reason: String,
    },

    /// Unparseable action string
    #[error("Invalid action '{action}' in rule '{rule_id}'")]
    InvalidAction { rule_id: String, action: String },

    /// Rule configuration is not valid JSON
    #[error("Rule config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error while reading rule configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
