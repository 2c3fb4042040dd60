//! Structural conformance checking of rules against the reference template.

use serde_yaml::{Mapping, Value};

use crate::schema::{Issue, Rule, RuleTemplate, Table};

/// Structural checker seam.
///
/// Implementations walk one rule against the template and append any
/// mismatches to the issue list they were handed, returning the extended
/// list. The accumulator is append-only: an implementation must never drop
/// or reorder issues recorded for earlier rules. The metadata table rides
/// along for checkers that cross-reference actual column values.
pub trait TraverseRules {
    fn traverse(
        &self,
        rule_name: &str,
        rule: &Rule,
        template: &RuleTemplate,
        issues: Vec<Issue>,
        metadata: &Table,
    ) -> Vec<Issue>;
}

/// Default checker: shape conformance against the template.
///
/// Records an issue for every constraint the template does not know, and
/// for every value whose YAML shape (scalar kind, sequence, mapping)
/// disagrees with the template's value for that constraint, recursing into
/// nested mappings. A template mapping whose single key is `"str"` matches
/// arbitrary string keys, with values checked against the wildcard's value.
pub struct TemplateChecker;

impl TraverseRules for TemplateChecker {
    fn traverse(
        &self,
        rule_name: &str,
        rule: &Rule,
        template: &RuleTemplate,
        mut issues: Vec<Issue>,
        _metadata: &Table,
    ) -> Vec<Issue> {
        for (constraint, value) in rule.iter() {
            match template.get(constraint) {
                Some(expected) => {
                    check_shape(rule_name, constraint, value, expected, &mut issues);
                }
                None => issues.push(Issue::new(
                    rule_name,
                    constraint,
                    format!("unknown constraint '{constraint}'"),
                )),
            }
        }
        issues
    }
}

fn check_shape(
    rule_name: &str,
    path: &str,
    value: &Value,
    expected: &Value,
    issues: &mut Vec<Issue>,
) {
    match (value, expected) {
        (Value::Mapping(got), Value::Mapping(exp)) => {
            let wildcard = wildcard_value(exp);
            for (key, inner) in got {
                let Some(key_str) = key.as_str() else {
                    issues.push(Issue::new(
                        rule_name,
                        path,
                        "mapping key is not a string".to_string(),
                    ));
                    continue;
                };
                let child_path = format!("{path}.{key_str}");
                if let Some(exp_inner) = exp.get(key) {
                    check_shape(rule_name, &child_path, inner, exp_inner, issues);
                } else if let Some(wild) = wildcard {
                    check_shape(rule_name, &child_path, inner, wild, issues);
                } else {
                    issues.push(Issue::new(
                        rule_name,
                        child_path,
                        format!("unknown field '{key_str}'"),
                    ));
                }
            }
        }
        (Value::Sequence(_), Value::Sequence(_)) => {}
        _ if shape_name(value) == shape_name(expected) => {}
        _ => issues.push(Issue::new(
            rule_name,
            path,
            format!(
                "expected {}, got {}",
                shape_name(expected),
                shape_name(value)
            ),
        )),
    }
}

/// Wildcard entry: a template mapping whose single key is `"str"`.
fn wildcard_value(expected: &Mapping) -> Option<&Value> {
    if expected.len() != 1 {
        return None;
    }
    let (key, value) = expected.iter().next()?;
    if key.as_str() == Some("str") {
        Some(value)
    } else {
        None
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
