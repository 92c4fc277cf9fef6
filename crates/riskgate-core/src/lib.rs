//! riskgate-core - Core types for the riskgate rule engine
//!
//! This crate provides the fundamental types shared across riskgate:
//! - Runtime field values and the evaluation context
//! - Declarative rule/condition definitions (the JSON contract)
//! - Compiled rules and decision results
//! - Error types

pub mod action;
pub mod context;
pub mod definition;
pub mod error;
pub mod operator;
pub mod result;
pub mod rule;
pub mod value;

// Re-export commonly used types
pub use action::RuleAction;
pub use context::RiskContext;
pub use definition::{ConditionDefinition, RuleDefinition};
pub use error::CoreError;
pub use operator::{LogicalOp, Operator};
pub use result::{ConditionMatch, DecisionResult, RuleMatchDetail};
pub use rule::Rule;
pub use value::{FieldKind, FieldValue};
