//! Scene-scoped rule registry
//!
//! Owns the loaded rule set and answers "which rules apply to this scene".
//! An explicit value constructed at startup and passed by reference; the
//! rule set is frozen after construction, so concurrent readers need no
//! synchronization.

use riskgate_core::Rule;
use std::sync::Arc;

/// Scene tag whose rules apply to every request
pub const COMMON_SCENE: &str = "COMMON";

/// Holder of the full compiled rule set with per-scene lookup
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Arc<Rule>>,
}

impl RuleRegistry {
    /// Build a registry over an already compiled rule set
    pub fn new(rules: Vec<Arc<Rule>>) -> Self {
        Self { rules }
    }

    /// Rules for one scene: scene-matching rules (case-insensitive) plus
    /// all COMMON rules, in load order
    pub fn rules_for_scene(&self, scene: &str) -> Vec<Arc<Rule>> {
        self.rules
            .iter()
            .filter(|rule| {
                rule.scene.eq_ignore_ascii_case(scene)
                    || rule.scene.eq_ignore_ascii_case(COMMON_SCENE)
            })
            .cloned()
            .collect()
    }

    /// The entire rule set, in load order
    pub fn all_rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    /// Number of loaded rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
