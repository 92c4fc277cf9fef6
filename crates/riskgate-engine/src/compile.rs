//! Condition and rule compilation
//!
//! Turns declarative definitions into executable, typed comparisons. The
//! expected value is parsed against the field's declared kind here, at
//! compile time, so a malformed configuration fails at load rather than
//! producing inconsistent results at evaluation time.

use crate::error::{EngineError, Result};
use crate::field::{FieldTable, Getter};
use riskgate_core::{
    ConditionDefinition, FieldKind, FieldValue, LogicalOp, Operator, RiskContext, Rule,
    RuleAction, RuleDefinition,
};
use std::sync::Arc;

/// Expected value pre-parsed against the field's declared kind
#[derive(Debug, Clone, PartialEq)]
enum ExpectedValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

/// One condition compiled into a typed comparison over the context
#[derive(Debug)]
pub struct CompiledCondition {
    field: String,
    op: Operator,
    expected: ExpectedValue,
    get: Getter,
}

impl CompiledCondition {
    /// Evaluate this condition against a context.
    ///
    /// Dispatch follows the runtime type of the actual value. An operator
    /// the type does not support (e.g. `>` on a boolean) evaluates to false
    /// rather than erroring; rules configured that way silently never match.
    pub fn evaluate(&self, context: &RiskContext) -> bool {
        let actual = (self.get)(context);
        match &self.expected {
            ExpectedValue::Number(expected) => match actual.as_f64() {
                Some(actual) => compare_f64(actual, self.op, *expected),
                None => false,
            },
            ExpectedValue::Bool(expected) => match actual {
                FieldValue::Bool(actual) => compare_bool(actual, self.op, *expected),
                _ => false,
            },
            ExpectedValue::Text(expected) => match actual {
                FieldValue::Text(actual) => compare_text(&actual, self.op, expected),
                _ => false,
            },
        }
    }

    /// The configured field path
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Numeric comparison; `==`/`!=` are exact floating comparisons.
///
/// No epsilon tolerance on purpose: equality against a configured literal is
/// part of the observable contract, and loosening it would change which rules
/// match.
pub(crate) fn compare_f64(actual: f64, op: Operator, expected: f64) -> bool {
    match op {
        Operator::Gt => actual > expected,
        Operator::Ge => actual >= expected,
        Operator::Lt => actual < expected,
        Operator::Le => actual <= expected,
        Operator::Eq => actual == expected,
        Operator::Ne => actual != expected,
    }
}

/// Boolean comparison; only `==` and `!=` are meaningful
pub(crate) fn compare_bool(actual: bool, op: Operator, expected: bool) -> bool {
    match op {
        Operator::Eq => actual == expected,
        Operator::Ne => actual != expected,
        _ => false,
    }
}

/// String comparison; only `==` and `!=` are meaningful
pub(crate) fn compare_text(actual: &str, op: Operator, expected: &str) -> bool {
    match op {
        Operator::Eq => actual == expected,
        Operator::Ne => actual != expected,
        _ => false,
    }
}

/// Lenient boolean parse: a case-insensitive "true" is true, anything else
/// is false. Never fails, for compatibility with existing configurations.
pub(crate) fn parse_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Compiles declarative rule definitions into executable rules
pub struct RuleCompiler {
    fields: FieldTable,
}

impl RuleCompiler {
    /// Compiler over the builtin field table
    pub fn new() -> Self {
        Self {
            fields: FieldTable::builtin(),
        }
    }

    /// Compiler over a custom field table
    pub fn with_field_table(fields: FieldTable) -> Self {
        Self { fields }
    }

    /// The field table this compiler resolves paths against
    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// Compile a single rule definition.
    ///
    /// Fails with `UnknownField`, `MalformedCondition` or `InvalidAction`,
    /// always carrying the rule id for diagnosis.
    pub fn compile(&self, def: &RuleDefinition) -> Result<Rule> {
        let action: RuleAction =
            def.action
                .parse()
                .map_err(|_| EngineError::InvalidAction {
                    rule_id: def.id.clone(),
                    action: def.action.clone(),
                })?;

        if def.conditions.is_empty() {
            // A rule without conditions is inert, not a wildcard.
            return Ok(Rule::new(
                def.id.clone(),
                def.description.clone(),
                def.scene.clone(),
                def.priority,
                action,
                |_| false,
            ));
        }

        let conditions = def
            .conditions
            .iter()
            .map(|c| self.compile_condition(&def.id, c))
            .collect::<Result<Vec<_>>>()?;

        let logic = def.logic();
        let predicate = move |ctx: &RiskContext| match logic {
            LogicalOp::And => conditions.iter().all(|c| c.evaluate(ctx)),
            LogicalOp::Or => conditions.iter().any(|c| c.evaluate(ctx)),
        };

        Ok(Rule::new(
            def.id.clone(),
            def.description.clone(),
            def.scene.clone(),
            def.priority,
            action,
            predicate,
        ))
    }

    /// Compile a whole definition list, wrapping each rule in `Arc` for
    /// sharing. The first failing rule aborts the batch.
    pub fn compile_all(&self, defs: &[RuleDefinition]) -> Result<Vec<Arc<Rule>>> {
        defs.iter()
            .map(|def| self.compile(def).map(Arc::new))
            .collect()
    }

    /// Compile one condition into a typed comparison
    pub fn compile_condition(
        &self,
        rule_id: &str,
        def: &ConditionDefinition,
    ) -> Result<CompiledCondition> {
        let (kind, get) =
            self.fields
                .lookup(&def.field)
                .ok_or_else(|| EngineError::UnknownField {
                    rule_id: rule_id.to_string(),
                    field: def.field.clone(),
                })?;

        let op: Operator = def.op.parse().map_err(|_| EngineError::MalformedCondition {
            rule_id: rule_id.to_string(),
            field: def.field.clone(),
            value: def.op.clone(),
            reason: "unknown operator".to_string(),
        })?;

        let expected = match kind {
            FieldKind::Int | FieldKind::Float => {
                let parsed: f64 =
                    def.value
                        .parse()
                        .map_err(|_| EngineError::MalformedCondition {
                            rule_id: rule_id.to_string(),
                            field: def.field.clone(),
                            value: def.value.clone(),
                            reason: "expected a numeric value".to_string(),
                        })?;
                ExpectedValue::Number(parsed)
            }
            FieldKind::Bool => ExpectedValue::Bool(parse_bool(&def.value)),
            FieldKind::Text => ExpectedValue::Text(def.value.clone()),
        };

        Ok(CompiledCondition {
            field: def.field.clone(),
            op,
            expected,
            get,
        })
    }
}

impl Default for RuleCompiler {
    fn default() -> Self {
        Self::new()
    }
}
