//! Field accessor table
//!
//! Maps dotted field paths from rule configuration (e.g. `"order.amount"`)
//! to typed accessor functions over `RiskContext`. The table is explicit and
//! built at initialization; a missing mapping surfaces when rules are
//! compiled, not as a silent runtime miss.

use crate::error::{EngineError, Result};
use riskgate_core::{FieldKind, FieldValue, RiskContext};
use std::collections::HashMap;

pub(crate) type Getter = fn(&RiskContext) -> FieldValue;

/// One registered field: its declared kind plus the extraction function
#[derive(Clone, Copy)]
struct FieldEntry {
    kind: FieldKind,
    get: Getter,
}

/// Lookup table from field path to typed accessor
pub struct FieldTable {
    entries: HashMap<&'static str, FieldEntry>,
}

impl FieldTable {
    /// The builtin table covering every `RiskContext` field
    pub fn builtin() -> Self {
        let mut entries: HashMap<&'static str, FieldEntry> = HashMap::new();

        let mut put = |path: &'static str, kind: FieldKind, get: Getter| {
            entries.insert(path, FieldEntry { kind, get });
        };

        put("user.id", FieldKind::Text, |ctx| {
            FieldValue::Text(ctx.user_id.clone())
        });
        put("user.isNew", FieldKind::Bool, |ctx| {
            FieldValue::Bool(ctx.new_user)
        });
        put("user.registerMinutes", FieldKind::Int, |ctx| {
            FieldValue::Int(ctx.register_minutes)
        });
        put("user.historyOrderCount", FieldKind::Int, |ctx| {
            FieldValue::Int(ctx.history_order_count)
        });
        put("order.id", FieldKind::Text, |ctx| {
            FieldValue::Text(ctx.order_id.clone())
        });
        put("order.amount", FieldKind::Float, |ctx| {
            FieldValue::Float(ctx.order_amount)
        });
        put("device.id", FieldKind::Text, |ctx| {
            FieldValue::Text(ctx.device_id.clone())
        });
        put("device.loginUserCountIn10Min", FieldKind::Int, |ctx| {
            FieldValue::Int(ctx.device_login_user_count_10m)
        });
        put("ip.addr", FieldKind::Text, |ctx| {
            FieldValue::Text(ctx.ip.clone())
        });
        put("ip.inBlacklist", FieldKind::Bool, |ctx| {
            FieldValue::Bool(ctx.ip_in_blacklist)
        });

        Self { entries }
    }

    /// Whether a field path is registered
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Declared kind of a registered field path
    pub fn kind_of(&self, path: &str) -> Option<FieldKind> {
        self.entries.get(path).map(|e| e.kind)
    }

    /// Declared kind and accessor function for a registered field path
    pub(crate) fn lookup(&self, path: &str) -> Option<(FieldKind, Getter)> {
        self.entries.get(path).map(|e| (e.kind, e.get))
    }

    /// Resolve a field path against a context
    pub fn value_of(&self, context: &RiskContext, path: &str) -> Result<FieldValue> {
        let entry = self
            .entries
            .get(path)
            .ok_or_else(|| EngineError::FieldNotFound(path.to_string()))?;
        Ok((entry.get)(context))
    }

    /// Number of registered field paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> RiskContext {
        RiskContext::new()
            .with_user_id("u-1")
            .with_new_user(true)
            .with_register_minutes(30)
            .with_history_order_count(2)
            .with_order_id("o-1")
            .with_order_amount(1500.0)
            .with_device_id("d-1")
            .with_device_login_user_count_10m(10)
            .with_ip("192.0.2.7")
            .with_ip_in_blacklist(true)
    }

    #[test]
    fn test_builtin_covers_all_context_fields() {
        let table = FieldTable::builtin();
        for path in [
            "user.id",
            "user.isNew",
            "user.registerMinutes",
            "user.historyOrderCount",
            "order.id",
            "order.amount",
            "device.id",
            "device.loginUserCountIn10Min",
            "ip.addr",
            "ip.inBlacklist",
        ] {
            assert!(table.contains(path), "missing mapping for {}", path);
        }
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_value_of() {
        let table = FieldTable::builtin();
        let ctx = sample_context();

        assert_eq!(
            table.value_of(&ctx, "order.amount").unwrap(),
            FieldValue::Float(1500.0)
        );
        assert_eq!(
            table.value_of(&ctx, "user.isNew").unwrap(),
            FieldValue::Bool(true)
        );
        assert_eq!(
            table.value_of(&ctx, "device.loginUserCountIn10Min").unwrap(),
            FieldValue::Int(10)
        );
        assert_eq!(
            table.value_of(&ctx, "ip.addr").unwrap(),
            FieldValue::Text("192.0.2.7".to_string())
        );
    }

    #[test]
    fn test_value_of_unknown_path() {
        let table = FieldTable::builtin();
        let ctx = sample_context();

        let err = table.value_of(&ctx, "user.shoeSize").unwrap_err();
        assert!(matches!(err, EngineError::FieldNotFound(_)));
        assert!(err.to_string().contains("user.shoeSize"));
    }

    #[test]
    fn test_kind_of() {
        let table = FieldTable::builtin();
        assert_eq!(table.kind_of("order.amount"), Some(FieldKind::Float));
        assert_eq!(table.kind_of("user.isNew"), Some(FieldKind::Bool));
        assert_eq!(table.kind_of("user.id"), Some(FieldKind::Text));
        assert_eq!(table.kind_of("nope"), None);
    }
}
