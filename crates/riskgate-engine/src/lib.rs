//! riskgate-engine - Rule compilation, evaluation and explanation
//!
//! The pipeline: declarative `RuleDefinition`s (JSON) are compiled into
//! executable `Rule`s, a `RuleEngine` evaluates them against a `RiskContext`
//! into a `DecisionResult`, and the `ExplainableRuleEngine` decorator adds a
//! per-condition audit trace.

pub mod compile;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod field;
pub mod registry;

// Re-export commonly used types
pub use compile::RuleCompiler;
pub use config::{load_rules_from_path, load_rules_from_str, LoadedRules};
pub use engine::{RuleEngine, SimpleRuleEngine};
pub use error::EngineError;
pub use explain::{ExplainableRuleEngine, RuleDefinitionIndex};
pub use field::FieldTable;
pub use registry::{RuleRegistry, COMMON_SCENE};
