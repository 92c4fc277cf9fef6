//! Runtime field values
//!
//! `FieldValue` is the typed form of a single context field as seen by the
//! rule engine. The set of variants is deliberately small: risk facts are
//! scalars, never nested structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value extracted from the risk context for one field path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value (counters, minutes since registration, ...)
    Int(i64),
    /// Floating-point value (amounts)
    Float(f64),
    /// Boolean value (flags such as blacklist membership)
    Bool(bool),
    /// String value (identifiers)
    Text(String),
}

/// Declared type of a context field, fixed when the field table is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Bool,
    Text,
}

impl FieldValue {
    /// The kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    /// Returns true for integer and floating-point values
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    /// Numeric view of this value. Integers widen to f64; non-numeric
    /// values return None.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FieldKind {
    /// Returns true for integer and floating-point kinds
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Int | FieldKind::Float)
    }
}
