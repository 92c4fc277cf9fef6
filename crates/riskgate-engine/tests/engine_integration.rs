//! End-to-end tests: JSON configuration through compilation, evaluation and
//! explanation.

use riskgate_core::{RiskContext, RuleAction};
use riskgate_engine::{
    load_rules_from_str, ExplainableRuleEngine, RuleEngine, RuleRegistry, SimpleRuleEngine,
};

const RULES_JSON: &str = r#"[
    {
        "id": "DEVICE_FANOUT",
        "description": "too many users logged in from this device recently",
        "scene": "LOGIN",
        "priority": 200,
        "action": "REJECT",
        "conditions": [
            {"field": "device.loginUserCountIn10Min", "op": ">", "value": "5"}
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
    },
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
        "id": "TRUSTED_REGULAR",
        "description": "established buyer",
        "scene": "PAY",
        "priority": 10,
        "action": "ALLOW",
        "conditions": [
            {"field": "user.historyOrderCount", "op": ">", "value": "50"}
        ]
    }
]"#;

fn explaining_engine(json: &str) -> (ExplainableRuleEngine, RuleRegistry) {
    let loaded = load_rules_from_str(json).expect("rules compile");
    let engine =
        ExplainableRuleEngine::new(Box::new(SimpleRuleEngine::new()), loaded.definitions);
    (engine, RuleRegistry::new(loaded.rules))
}

// Scenario A: device fan-out above threshold rejects the login.
#[test]
fn device_fanout_rejects() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new()
        .with_device_id("d-1")
        .with_device_login_user_count_10m(10);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("LOGIN"));
    assert_eq!(result.final_action, RuleAction::Reject);
    assert_eq!(result.matched_rules[0].id, "DEVICE_FANOUT");

    let detail = &result.rule_match_details[0];
    assert!(detail.matched);
    assert_eq!(detail.condition_matches.len(), 1);
    let cm = &detail.condition_matches[0];
    assert_eq!(cm.field, "device.loginUserCountIn10Min");
    assert_eq!(cm.actual_value, "10");
    assert!(cm.matched);
}

// Scenario B: AND rule with both conditions true routes to manual review.
#[test]
fn new_user_large_order_goes_to_review() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new()
        .with_new_user(true)
        .with_order_amount(1500.0);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));
    assert_eq!(result.final_action, RuleAction::ManualReview);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].id, "NEW_USER_BIG_ORDER");

    let detail = &result.rule_match_details[0];
    assert_eq!(detail.condition_matches.len(), 2);
    assert!(detail.condition_matches.iter().all(|cm| cm.matched));
}

// Scenario C: matched rules present priority-descending, final action by
// severity (a REJECT beats a MANUAL_REVIEW regardless of priority order).
#[test]
fn severity_beats_priority() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    // Triggers both the priority-300 COMMON blacklist reject and the
    // priority-90 review rule.
    let ctx = RiskContext::new()
        .with_new_user(true)
        .with_order_amount(1500.0)
        .with_ip_in_blacklist(true);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));
    assert_eq!(result.final_action, RuleAction::Reject);
    let ids: Vec<&str> = result.matched_rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["IP_BLACKLIST", "NEW_USER_BIG_ORDER"]);
}

// Scenario D: for a matched AND rule every reconstructed condition must be
// true, and the recombined flag agrees with the base engine.
#[test]
fn explanation_is_consistent_with_base_decision() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new()
        .with_new_user(true)
        .with_order_amount(1200.0);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));
    for detail in &result.rule_match_details {
        assert!(detail.matched, "matched rule {} must explain as matched", detail.rule.id);
        if detail.rule.id == "NEW_USER_BIG_ORDER" {
            assert!(detail.condition_matches.iter().all(|cm| cm.matched));
        }
    }
}

#[test]
fn no_rule_matches_defaults_to_allow() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new()
        .with_new_user(false)
        .with_order_amount(10.0);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));
    assert_eq!(result.final_action, RuleAction::Allow);
    assert!(result.matched_rules.is_empty());
}

#[test]
fn allow_rule_match_still_allows() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new()
        .with_new_user(false)
        .with_history_order_count(80)
        .with_order_amount(200.0);

    let result = engine.evaluate(&ctx, &registry.rules_for_scene("PAY"));
    assert_eq!(result.final_action, RuleAction::Allow);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].id, "TRUSTED_REGULAR");
}

#[test]
fn common_rules_apply_to_every_scene() {
    let (engine, registry) = explaining_engine(RULES_JSON);
    let ctx = RiskContext::new().with_ip_in_blacklist(true);

    for scene in ["LOGIN", "PAY", "REGISTER"] {
        let result = engine.evaluate(&ctx, &registry.rules_for_scene(scene));
        assert_eq!(result.final_action, RuleAction::Reject, "scene {}", scene);
    }
}

#[test]
fn plain_engine_produces_no_details() -> anyhow::Result<()> {
    let loaded = load_rules_from_str(RULES_JSON)?;
    let engine = SimpleRuleEngine::new();
    let ctx = RiskContext::new().with_ip_in_blacklist(true);

    let result = engine.evaluate(&ctx, &loaded.rules);
    assert_eq!(result.final_action, RuleAction::Reject);
    assert!(result.rule_match_details.is_empty());
    Ok(())
}

// Compiled rules are shared read-only; evaluations from multiple threads
// need no synchronization.
#[test]
fn concurrent_evaluations_share_rules() {
    let loaded = load_rules_from_str(RULES_JSON).unwrap();
    let rules = std::sync::Arc::new(loaded.rules);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = rules.clone();
            std::thread::spawn(move || {
                let engine = SimpleRuleEngine::new();
                let ctx = RiskContext::new().with_device_login_user_count_10m(i * 3);
                engine.evaluate(&ctx, &rules).final_action
            })
        })
        .collect();

    let actions: Vec<RuleAction> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(actions[0], RuleAction::Allow); // 0 logins
    assert_eq!(actions[3], RuleAction::Reject); // 9 logins
}
