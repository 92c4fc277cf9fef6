//! Decision engines
//!
//! `RuleEngine` is the evaluation boundary; `SimpleRuleEngine` is the plain
//! implementation. The explanation decorator in [`crate::explain`] wraps any
//! `RuleEngine` without changing its decision.

use riskgate_core::{DecisionResult, RiskContext, Rule, RuleAction};
use std::sync::Arc;

/// A rule engine: evaluates a rule set against a context
pub trait RuleEngine {
    /// Evaluate every rule against the context and combine the matches into
    /// a decision.
    fn evaluate(&self, context: &RiskContext, rules: &[Arc<Rule>]) -> DecisionResult;
}

/// The straightforward engine:
/// - run every rule's predicate (all matches are collected, priority never
///   short-circuits evaluation)
/// - stable-sort matches by priority descending
/// - resolve the final action by severity
#[derive(Debug, Default)]
pub struct SimpleRuleEngine;

impl SimpleRuleEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }
}

impl RuleEngine for SimpleRuleEngine {
    fn evaluate(&self, context: &RiskContext, rules: &[Arc<Rule>]) -> DecisionResult {
        let mut matched: Vec<Arc<Rule>> = Vec::new();

        for rule in rules {
            if rule.matches(context) {
                tracing::debug!(rule_id = %rule.id, action = %rule.action, "rule matched");
                matched.push(rule.clone());
            }
        }

        if matched.is_empty() {
            // No rule matched: default to allow
            return DecisionResult::new(RuleAction::Allow, matched);
        }

        // Stable sort keeps input order on equal priorities
        matched.sort_by(|a, b| b.priority.cmp(&a.priority));

        let final_action = resolve_final_action(&matched);
        tracing::debug!(
            final_action = %final_action,
            matched = matched.len(),
            "decision resolved"
        );
        DecisionResult::new(final_action, matched)
    }
}

/// Severity precedence: any REJECT wins, then any MANUAL_REVIEW, else ALLOW.
///
/// Priority deliberately plays no part here; it orders the matched list for
/// presentation only. A low-priority REJECT outranks a high-priority ALLOW.
fn resolve_final_action(matched: &[Arc<Rule>]) -> RuleAction {
    if matched.iter().any(|r| r.action == RuleAction::Reject) {
        return RuleAction::Reject;
    }
    if matched.iter().any(|r| r.action == RuleAction::ManualReview) {
        return RuleAction::ManualReview;
    }
    RuleAction::Allow
}
