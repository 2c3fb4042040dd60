//! The [`Rule`] mapping and its derived collection types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Declarative constraint set for one metadata column.
///
/// A rule is an ordered mapping from constraint name (`blank`, `format`,
/// `ontology`, …) to an arbitrary YAML value: scalar, sequence, or nested
/// mapping. Rules carry no identity of their own; the owning column name is
/// the key in the surrounding [`RuleSet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(IndexMap<String, Value>);

impl Rule {
    /// True when the rule declares the given constraint.
    pub fn contains(&self, constraint: &str) -> bool {
        self.0.contains_key(constraint)
    }

    /// Value of a constraint, if declared.
    pub fn get(&self, constraint: &str) -> Option<&Value> {
        self.0.get(constraint)
    }

    /// Constraint names in declaration order.
    pub fn constraint_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over (constraint, value) pairs in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Rule {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Rule(iter.into_iter().collect())
    }
}

/// Ordered mapping from metadata column name to its [`Rule`].
///
/// Built incrementally during loading; treated as immutable once returned.
/// Every key corresponds to exactly one source file.
pub type RuleSet = IndexMap<String, Rule>;

/// Inverse index: constraint name → columns that declare it.
///
/// Derived, read-only; always recomputable as a pure function of a
/// [`RuleSet`] via [`crate::index::rule_index`]. List order follows column
/// iteration order, then per-column constraint order.
pub type RuleIndex = IndexMap<String, Vec<String>>;

/// Reference schema describing the expected structure and types per
/// constraint name. Loaded once from the packaged `rules.txt` and shared
/// read-only for the life of the process.
pub type RuleTemplate = IndexMap<String, Value>;
