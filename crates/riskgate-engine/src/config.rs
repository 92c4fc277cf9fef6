//! Rule configuration loading
//!
//! Parses a JSON array of rule definitions and compiles it into shareable
//! rules, keeping the definitions alongside for the explanation layer.
//!
//! Load policy is all-or-nothing: a single rule that fails to compile aborts
//! the whole load, with the offending rule id in the error. Partial rule
//! sets never reach the engine.

use crate::compile::RuleCompiler;
use crate::error::Result;
use crate::explain::RuleDefinitionIndex;
use riskgate_core::{Rule, RuleDefinition};
use std::path::Path;
use std::sync::Arc;

/// Result of loading a rule configuration: the compiled rules plus the
/// definition index the explanation layer consults
#[derive(Debug)]
pub struct LoadedRules {
    /// Compiled rules, in configuration order
    pub rules: Vec<Arc<Rule>>,

    /// Rule id -> declarative definition
    pub definitions: RuleDefinitionIndex,
}

/// Load and compile rules from a JSON string
pub fn load_rules_from_str(json: &str) -> Result<LoadedRules> {
    let defs: Vec<RuleDefinition> = serde_json::from_str(json)?;
    compile_definitions(defs)
}

/// Load and compile rules from a JSON file
pub fn load_rules_from_path(path: impl AsRef<Path>) -> Result<LoadedRules> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), "loading rule configuration");
    load_rules_from_str(&content)
}

fn compile_definitions(defs: Vec<RuleDefinition>) -> Result<LoadedRules> {
    let compiler = RuleCompiler::new();
    let rules = compiler.compile_all(&defs)?;

    let definitions: RuleDefinitionIndex = defs
        .into_iter()
        .map(|def| (def.id.clone(), def))
        .collect();

    tracing::info!(count = rules.len(), "compiled rule set");
    Ok(LoadedRules { rules, definitions })
}
