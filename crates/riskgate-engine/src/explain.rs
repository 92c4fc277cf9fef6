//! Explanation decorator
//!
//! `ExplainableRuleEngine` wraps any `RuleEngine` and augments its result
//! with a per-condition audit trace, re-evaluating each matched rule's
//! declared conditions against the same context. The base decision is never
//! altered.

use crate::compile::{compare_bool, compare_f64, compare_text, parse_bool};
use crate::engine::RuleEngine;
use crate::field::FieldTable;
use riskgate_core::{
    ConditionDefinition, ConditionMatch, DecisionResult, FieldValue, LogicalOp, Operator,
    RiskContext, Rule, RuleDefinition, RuleMatchDetail,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Placeholder recorded as the actual value when a traced condition
/// references a field path with no accessor
const UNKNOWN_FIELD_VALUE: &str = "<unknown-field>";

/// Lookup from rule id to its declarative definition, built once at load
/// time and passed to whichever component needs definition access
pub type RuleDefinitionIndex = HashMap<String, RuleDefinition>;

/// Decorator adding per-condition explanations to an inner engine's result
pub struct ExplainableRuleEngine {
    inner: Box<dyn RuleEngine + Send + Sync>,
    definitions: RuleDefinitionIndex,
    fields: FieldTable,
}

impl ExplainableRuleEngine {
    /// Wrap an inner engine, explaining matches through the given
    /// definition index and the builtin field table
    pub fn new(
        inner: Box<dyn RuleEngine + Send + Sync>,
        definitions: RuleDefinitionIndex,
    ) -> Self {
        Self {
            inner,
            definitions,
            fields: FieldTable::builtin(),
        }
    }

    /// Use a custom field table for trace evaluation
    pub fn with_field_table(mut self, fields: FieldTable) -> Self {
        self.fields = fields;
        self
    }

    fn explain_rule(&self, context: &RiskContext, rule: &Arc<Rule>) -> RuleMatchDetail {
        let def = self.definitions.get(&rule.id);

        let def = match def {
            Some(d) if !d.conditions.is_empty() => d,
            // No declarative definition (ad hoc rule) or an empty condition
            // list: record the match without a condition trace.
            _ => return RuleMatchDetail::new(rule.clone(), true, Vec::new()),
        };

        let mut condition_matches = Vec::with_capacity(def.conditions.len());
        let mut all_true = true;
        let mut any_true = false;

        for cond in &def.conditions {
            let cm = trace_condition(context, cond, &self.fields);
            all_true = all_true && cm.matched;
            any_true = any_true || cm.matched;
            condition_matches.push(cm);
        }

        // Recombine with the rule's own operator. This is expected to agree
        // with the inner engine's verdict; disagreement is surfaced, not
        // corrected.
        let matched = match def.logic() {
            LogicalOp::And => all_true,
            LogicalOp::Or => any_true,
        };
        if !matched {
            tracing::warn!(
                rule_id = %rule.id,
                "explanation recomputation disagrees with base engine match"
            );
        }

        RuleMatchDetail::new(rule.clone(), matched, condition_matches)
    }
}

impl RuleEngine for ExplainableRuleEngine {
    fn evaluate(&self, context: &RiskContext, rules: &[Arc<Rule>]) -> DecisionResult {
        let base = self.inner.evaluate(context, rules);

        let details = base
            .matched_rules
            .iter()
            .map(|rule| self.explain_rule(context, rule))
            .collect();

        DecisionResult::with_details(base.final_action, base.matched_rules, details)
    }
}

/// Evaluate one declared condition into a trace entry.
///
/// This path is lenient by design: it runs after compilation has validated
/// the configuration, so an unknown field or unparseable value here records
/// a non-match instead of failing the evaluation.
fn trace_condition(
    context: &RiskContext,
    cond: &ConditionDefinition,
    fields: &FieldTable,
) -> ConditionMatch {
    let actual = match fields.value_of(context, &cond.field) {
        Ok(value) => value,
        Err(_) => {
            return ConditionMatch::new(
                cond.field.clone(),
                cond.op.clone(),
                cond.value.clone(),
                UNKNOWN_FIELD_VALUE,
                false,
            );
        }
    };

    let actual_str = actual.to_string();
    let matched = match cond.op.parse::<Operator>() {
        Ok(op) => match &actual {
            FieldValue::Int(_) | FieldValue::Float(_) => match cond.value.parse::<f64>() {
                // as_f64 is total for numeric values
                Ok(expected) => compare_f64(actual.as_f64().unwrap_or_default(), op, expected),
                Err(_) => false,
            },
            FieldValue::Bool(actual) => compare_bool(*actual, op, parse_bool(&cond.value)),
            FieldValue::Text(actual) => compare_text(actual, op, &cond.value),
        },
        Err(_) => false,
    };

    ConditionMatch::new(
        cond.field.clone(),
        cond.op.clone(),
        cond.value.clone(),
        actual_str,
        matched,
    )
}
