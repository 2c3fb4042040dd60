//! Rule loading orchestration: discover, parse, check, index.
//!
//! [`load_rules`] drives the whole pipeline and returns a [`RulesOutcome`]
//! carrying both the parsed structures and every accumulated diagnostic.
//! Nothing here aborts on a nonconforming rule; only the fatal parser
//! errors (missing comment header, malformed YAML) end the batch early.

mod traverse;

pub use traverse::{TemplateChecker, TraverseRules};

use std::path::Path;

use tracing::info;

use crate::discovery::discover_paths;
use crate::error::Result;
use crate::index::rule_index;
use crate::parser::parse_rule_file;
use crate::schema::{Issue, MissingMandatory, RuleIndex, RuleSet, Table};
use crate::template::rules_template;

/// Constraints every rule must declare.
pub const MANDATORY_CONSTRAINTS: [&str; 2] = ["blank", "format"];

/// Severity attached to a missing mandatory constraint.
const MISSING_SEVERITY: u8 = 1;

/// Everything produced by one rule-loading pass.
#[derive(Debug, Clone, Default)]
pub struct RulesOutcome {
    /// Column name → parsed rule, one entry per processed source file.
    pub rules: RuleSet,
    /// Constraint name → declaring columns, derived from `rules`.
    pub index: RuleIndex,
    /// Structural mismatches against the template, in discovery order.
    pub issues: Vec<Issue>,
    /// Rules lacking one of [`MANDATORY_CONSTRAINTS`].
    pub missing: Vec<MissingMandatory>,
}

/// Discover, parse, and validate rule files under `root`.
///
/// `filter` selects which discovered rule names are processed; pass
/// `|_| true` to process everything. `metadata` is handed to the checker
/// for cross-checks against the actual column values. Issues accumulate
/// across rules in discovery order and are never reset between rules.
///
/// A fatal parse error on any selected rule ends the batch; the authoring
/// convention that every rule file starts with a comment line keeps that
/// path cold in practice.
pub fn load_rules<F>(
    root: &Path,
    metadata: &Table,
    filter: F,
    checker: &dyn TraverseRules,
) -> Result<RulesOutcome>
where
    F: Fn(&str) -> bool,
{
    let template = rules_template();

    let mut rules = RuleSet::new();
    let mut issues = Vec::new();
    let mut missing = Vec::new();

    for (rule_name, rule_path) in discover_paths(root, "rules") {
        if !filter(&rule_name) {
            continue;
        }

        let rule = parse_rule_file(&rule_path)?;

        missing.extend(
            MANDATORY_CONSTRAINTS
                .iter()
                .filter(|m| !rule.contains(m))
                .map(|m| MissingMandatory::new(&rule_name, *m, MISSING_SEVERITY)),
        );

        issues = checker.traverse(&rule_name, &rule, template, issues, metadata);
        rules.insert(rule_name, rule);
    }

    let index = rule_index(&rules);
    info!(
        rules = rules.len(),
        issues = issues.len(),
        missing = missing.len(),
        "loaded metadata rules"
    );

    Ok(RulesOutcome {
        rules,
        index,
        issues,
        missing,
    })
}
