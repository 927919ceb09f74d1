//! Conditional target evaluation.
//!
//! Reduces a raw `imports` value (string, fallback array, or condition
//! object) to a concrete target string under the allowed condition set.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Borrowed view of one `imports` value, classifying the three shapes
/// the resolution algorithm distinguishes.
#[derive(Debug, Clone, Copy)]
pub enum ImportValue<'a> {
    /// A concrete target string; terminal and unconditional.
    Target(&'a str),
    /// Ordered alternatives; the first one that resolves wins.
    Alternatives(&'a [Value]),
    /// Condition-name keyed branches, tried in declaration order.
    Conditions(&'a Map<String, Value>),
}

impl<'a> ImportValue<'a> {
    /// Classify a JSON value. Null, booleans, and numbers carry no
    /// resolvable target and classify as `None`.
    #[must_use]
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Target(s)),
            Value::Array(items) => Some(Self::Alternatives(items)),
            Value::Object(map) => Some(Self::Conditions(map)),
            _ => None,
        }
    }
}

/// Resolve a raw `imports` value to a target string.
///
/// Condition objects are scanned in the manifest's own key order; the
/// first key present in `allowed` is recursed into and its outcome is
/// final, even when that branch resolves to nothing. Keys outside
/// `allowed` are skipped without recursing.
///
/// Returns `None` when no branch is satisfied; error signaling is the
/// caller's job.
#[must_use]
pub fn resolve_conditions<'a>(value: &'a Value, allowed: &HashSet<&str>) -> Option<&'a str> {
    match ImportValue::classify(value)? {
        ImportValue::Target(target) => Some(target),
        ImportValue::Alternatives(items) => items
            .iter()
            .find_map(|item| resolve_conditions(item, allowed)),
        ImportValue::Conditions(map) => map
            .iter()
            .find(|(key, _)| allowed.contains(key.as_str()))
            .and_then(|(_, branch)| resolve_conditions(branch, allowed)),
    }
}
