//! Accumulated validation records.

use serde::{Deserialize, Serialize};

/// A structural mismatch between a rule and the reference template.
///
/// Issues are collected in discovery order and never raised; the caller
/// decides whether accumulated issues constitute an overall failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Name of the rule (metadata column) the mismatch was found in.
    pub rule: String,
    /// Dotted location within the rule, e.g. `"normalization.maximum"`.
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(
        rule: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A rule lacking one of the mandatory constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMandatory {
    /// Name of the rule (metadata column) with the gap.
    pub rule: String,
    /// The absent constraint name, e.g. `"blank"`.
    pub constraint: String,
    pub severity: u8,
}

impl MissingMandatory {
    pub fn new(rule: impl Into<String>, constraint: impl Into<String>, severity: u8) -> Self {
        Self {
            rule: rule.into(),
            constraint: constraint.into(),
            severity,
        }
    }
}
