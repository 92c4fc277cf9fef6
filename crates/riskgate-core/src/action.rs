//! Rule actions

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The effect a matched rule requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleAction {
    /// Let the request through
    Allow,
    /// Hard block
    Reject,
    /// Route to a human reviewer
    ManualReview,
}

impl RuleAction {
    /// Configuration form of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::Allow => "ALLOW",
            RuleAction::Reject => "REJECT",
            RuleAction::ManualReview => "MANUAL_REVIEW",
        }
    }
}

impl FromStr for RuleAction {
    type Err = CoreError;

    /// Case-insensitive parse of the configuration's action string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ALLOW") {
            Ok(RuleAction::Allow)
        } else if s.eq_ignore_ascii_case("REJECT") {
            Ok(RuleAction::Reject)
        } else if s.eq_ignore_ascii_case("MANUAL_REVIEW") {
            Ok(RuleAction::ManualReview)
        } else {
            Err(CoreError::InvalidAction(s.to_string()))
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
