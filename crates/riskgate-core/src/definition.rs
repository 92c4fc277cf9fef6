//! Declarative rule definitions (the JSON configuration contract)
//!
//! These structs mirror the persisted rule format one-to-one. Values are
//! still raw strings here; typing happens during compilation.

use crate::operator::LogicalOp;
use serde::{Deserialize, Serialize};

/// One condition as written in configuration, e.g.
/// `{"field": "order.amount", "op": ">", "value": "1000"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    /// Dotted field path into the context
    pub field: String,

    /// Comparison operator symbol (">", ">=", "<", "<=", "==", "!=")
    pub op: String,

    /// Expected value as untyped text; resolved against the field's
    /// runtime type at compile time
    pub value: String,
}

/// One rule as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule id
    pub id: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Business scene this rule belongs to ("PAY", "LOGIN", ... or "COMMON")
    #[serde(default)]
    pub scene: String,

    /// Priority, higher is more severe; affects presentation order only
    #[serde(default)]
    pub priority: i32,

    /// Action string: "ALLOW" / "REJECT" / "MANUAL_REVIEW" (any case)
    pub action: String,

    /// "AND" / "OR"; absent or unrecognized values behave as AND
    #[serde(default, rename = "logicalOp")]
    pub logical_op: Option<String>,

    /// Ordered condition list; an empty list makes the rule inert
    #[serde(default)]
    pub conditions: Vec<ConditionDefinition>,
}

impl RuleDefinition {
    /// How this rule combines its conditions (lenient, defaults to AND)
    pub fn logic(&self) -> LogicalOp {
        LogicalOp::from_config(self.logical_op.as_deref())
    }
}

impl ConditionDefinition {
    /// Create a condition definition
    pub fn new(
        field: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            op: op.into(),
            value: value.into(),
        }
    }
}
