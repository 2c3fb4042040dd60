//! Packaged reference template describing valid rule structure.

use std::sync::OnceLock;

use crate::schema::RuleTemplate;

/// Reference rule structure shipped with the crate.
const RULES_TEMPLATE: &str = include_str!("../assets/rules.txt");

static TEMPLATE: OnceLock<RuleTemplate> = OnceLock::new();

/// The reference template, parsed once on first access.
///
/// Immutable for the life of the process; every validation pass compares
/// rules against this same instance.
pub fn rules_template() -> &'static RuleTemplate {
    TEMPLATE.get_or_init(|| {
        serde_yaml::from_str(RULES_TEMPLATE).expect("packaged rules.txt must be valid YAML")
    })
}
