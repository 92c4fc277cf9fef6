//! Compiled rules
//!
//! A `Rule` binds configuration metadata to an executable predicate over the
//! context. Rules are immutable after compilation and are shared behind
//! `Arc`, so many concurrent evaluations can read them without locking.

use crate::action::RuleAction;
use crate::context::RiskContext;
use std::fmt;

/// Executable form of a rule's condition set
pub type RulePredicate = Box<dyn Fn(&RiskContext) -> bool + Send + Sync>;

/// A single compiled risk rule
pub struct Rule {
    /// Unique rule id
    pub id: String,

    /// Human-readable description
    pub description: String,

    /// Business scene ("PAY", "LOGIN", ... or "COMMON" for all scenes)
    pub scene: String,

    /// Priority, higher is more severe
    pub priority: i32,

    /// Action to take when the rule matches
    pub action: RuleAction,

    predicate: RulePredicate,
}

impl Rule {
    /// Create a rule from metadata and an arbitrary predicate.
    ///
    /// Rules built this way (rather than compiled from a definition) have no
    /// retrievable condition list; the explanation layer reports them with an
    /// empty per-condition trace.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        scene: impl Into<String>,
        priority: i32,
        action: RuleAction,
        predicate: impl Fn(&RiskContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            scene: scene.into(),
            priority,
            action,
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate this rule's predicate against a context
    pub fn matches(&self, context: &RiskContext) -> bool {
        (self.predicate)(context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("scene", &self.scene)
            .field("priority", &self.priority)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}
