//! Inverse index from constraint name to declaring columns.

use crate::schema::{RuleIndex, RuleSet};

/// Invert a column→rule mapping into constraint→columns.
///
/// Pure function of the rule set: for each (column, rule) pair, each
/// constraint the rule declares gets the column appended to its entry,
/// created on first use. Order is column iteration order, then per-column
/// constraint order. Recompute whenever the rule set changes.
pub fn rule_index(rules: &RuleSet) -> RuleIndex {
    let mut index = RuleIndex::new();
    for (column, rule) in rules {
        for constraint in rule.constraint_names() {
            index
                .entry(constraint.to_string())
                .or_default()
                .push(column.clone());
        }
    }
    index
}
