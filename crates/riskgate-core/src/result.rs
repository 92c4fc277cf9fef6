//! Decision results and explanation records

use crate::action::RuleAction;
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Evaluation trace for one condition of one rule during one decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    /// Configured field path, e.g. "order.amount"
    pub field: String,

    /// Operator symbol, e.g. ">"
    pub op: String,

    /// Expected value from configuration (string form)
    pub expected_value: String,

    /// Actual value observed in the context (string form)
    pub actual_value: String,

    /// Whether this condition held
    pub matched: bool,
}

/// Per-rule explanation: overall outcome plus each condition's trace
#[derive(Debug, Clone)]
pub struct RuleMatchDetail {
    /// The rule this detail describes
    pub rule: Arc<Rule>,

    /// Result of recombining the condition traces with the rule's
    /// logical operator
    pub matched: bool,

    /// One trace entry per configured condition, in configuration order
    pub condition_matches: Vec<ConditionMatch>,
}

/// Outcome of one decision request
#[derive(Debug, Clone)]
pub struct DecisionResult {
    /// The resolved action
    pub final_action: RuleAction,

    /// Matched rules, priority-descending (stable on ties)
    pub matched_rules: Vec<Arc<Rule>>,

    /// Per-rule explanations; empty unless an explaining engine produced
    /// this result
    pub rule_match_details: Vec<RuleMatchDetail>,
}

impl ConditionMatch {
    /// Create a condition trace entry
    pub fn new(
        field: impl Into<String>,
        op: impl Into<String>,
        expected_value: impl Into<String>,
        actual_value: impl Into<String>,
        matched: bool,
    ) -> Self {
        Self {
            field: field.into(),
            op: op.into(),
            expected_value: expected_value.into(),
            actual_value: actual_value.into(),
            matched,
        }
    }
}

impl RuleMatchDetail {
    /// Create a rule detail
    pub fn new(rule: Arc<Rule>, matched: bool, condition_matches: Vec<ConditionMatch>) -> Self {
        Self {
            rule,
            matched,
            condition_matches,
        }
    }
}

impl DecisionResult {
    /// Result without explanation details
    pub fn new(final_action: RuleAction, matched_rules: Vec<Arc<Rule>>) -> Self {
        Self {
            final_action,
            matched_rules,
            rule_match_details: Vec::new(),
        }
    }

    /// Result carrying per-rule explanations
    pub fn with_details(
        final_action: RuleAction,
        matched_rules: Vec<Arc<Rule>>,
        rule_match_details: Vec<RuleMatchDetail>,
    ) -> Self {
        Self {
            final_action,
            matched_rules,
            rule_match_details,
        }
    }
}
