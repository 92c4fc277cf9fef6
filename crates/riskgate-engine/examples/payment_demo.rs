//! Payment scene walkthrough: load rules from JSON, evaluate a context with
//! the explaining engine and print the per-condition trace.
//!
//! Run with: `cargo run --example payment_demo`

use riskgate_core::RiskContext;
use riskgate_engine::{
    load_rules_from_str, ExplainableRuleEngine, RuleEngine, RuleRegistry, SimpleRuleEngine,
};

const RULES_JSON: &str = r#"[
    {
        "id": "IP_BLACKLIST",
        "description": "ip on the blacklist",
        "scene": "COMMON",
        "priority": 300,
        "action": "REJECT",
        "conditions": [
            {"field": "ip.inBlacklist", "op": "==", "value": "true"}
        ]
    },
    {
        "id": "NEW_USER_BIG_ORDER",
        "description": "new user placing a large order",
        "scene": "PAY",
        "priority": 90,
        "action": "MANUAL_REVIEW",
        "logicalOp": "AND",
        "conditions": [
            {"field": "user.isNew", "op": "==", "value": "true"},
            {"field": "order.amount", "op": ">", "value": "1000"}
        ]
    }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let loaded = load_rules_from_str(RULES_JSON)?;
    let registry = RuleRegistry::new(loaded.rules);
    let engine =
        ExplainableRuleEngine::new(Box::new(SimpleRuleEngine::new()), loaded.definitions);

    let ctx = RiskContext::new()
        .with_user_id("u-1001")
        .with_new_user(true)
        .with_order_id("o-2002")
        .with_order_amount(1500.0)
        .with_ip("192.0.2.7")
        .with_ip_in_blacklist(false);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));

    println!("final action: {}", result.final_action);
    for detail in &result.rule_match_details {
        println!(
            "rule {} ({}) matched={}",
            detail.rule.id, detail.rule.description, detail.matched
        );
        for cm in &detail.condition_matches {
            println!(
                "  {} {} {} | actual={} matched={}",
                cm.field, cm.op, cm.expected_value, cm.actual_value, cm.matched
            );
        }
    }

    Ok(())
}
