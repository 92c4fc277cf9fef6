//! Evaluation context
//!
//! `RiskContext` is the fact set describing the entity/event under
//! evaluation. It is built fresh for each decision request, never mutated
//! during evaluation, and owned exclusively by one evaluation call.

use serde::{Deserialize, Serialize};

/// Risk-relevant facts for a single decision request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskContext {
    /// User identifier
    pub user_id: String,

    /// Whether the user registered recently
    pub new_user: bool,

    /// Minutes elapsed since registration
    pub register_minutes: i64,

    /// Number of historical orders for this user
    pub history_order_count: i64,

    /// Order identifier
    pub order_id: String,

    /// Order amount
    pub order_amount: f64,

    /// Device identifier
    pub device_id: String,

    /// Distinct users that logged in from this device in the last 10 minutes
    pub device_login_user_count_10m: i64,

    /// Client IP address
    pub ip: String,

    /// Whether the IP is on the blacklist
    pub ip_in_blacklist: bool,
}

impl RiskContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Mark the user as new or established
    pub fn with_new_user(mut self, new_user: bool) -> Self {
        self.new_user = new_user;
        self
    }

    /// Set minutes since registration
    pub fn with_register_minutes(mut self, minutes: i64) -> Self {
        self.register_minutes = minutes;
        self
    }

    /// Set the historical order count
    pub fn with_history_order_count(mut self, count: i64) -> Self {
        self.history_order_count = count;
        self
    }

    /// Set the order id
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    /// Set the order amount
    pub fn with_order_amount(mut self, amount: f64) -> Self {
        self.order_amount = amount;
        self
    }

    /// Set the device id
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = device_id.into();
        self
    }

    /// Set the device's recent login fan-out
    pub fn with_device_login_user_count_10m(mut self, count: i64) -> Self {
        self.device_login_user_count_10m = count;
        self
    }

    /// Set the client IP
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    /// Set blacklist membership for the IP
    pub fn with_ip_in_blacklist(mut self, in_blacklist: bool) -> Self {
        self.ip_in_blacklist = in_blacklist;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let ctx = RiskContext::new()
            .with_user_id("u-1001")
            .with_new_user(true)
            .with_register_minutes(12)
            .with_history_order_count(0)
            .with_order_id("o-2002")
            .with_order_amount(1500.0)
            .with_device_id("d-3003")
            .with_device_login_user_count_10m(10)
            .with_ip("10.0.0.1")
            .with_ip_in_blacklist(false);

        assert_eq!(ctx.user_id, "u-1001");
        assert!(ctx.new_user);
        assert_eq!(ctx.register_minutes, 12);
        assert_eq!(ctx.order_amount, 1500.0);
        assert_eq!(ctx.device_login_user_count_10m, 10);
        assert!(!ctx.ip_in_blacklist);
    }

    #[test]
    fn test_default_is_empty() {
        let ctx = RiskContext::default();
        assert_eq!(ctx.user_id, "");
        assert!(!ctx.new_user);
        assert_eq!(ctx.order_amount, 0.0);
    }

    #[test]
    fn test_clone_equality() {
        let ctx = RiskContext::new().with_order_amount(99.5).with_new_user(true);
        assert_eq!(ctx.clone(), ctx);
    }
}
