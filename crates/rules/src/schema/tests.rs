//! Tests for the core data model.

use super::*;

#[test]
fn rule_deserializes_preserving_order() {
    let rule: Rule = serde_yaml::from_str(
        r#"
blank:
  - Not applicable
  - Missing
format: str
ontology: Gazetteer
"#,
    )
    .unwrap();

    let names: Vec<_> = rule.constraint_names().collect();
    assert_eq!(names, vec!["blank", "format", "ontology"]);
    assert!(rule.contains("blank"));
    assert!(!rule.contains("missing"));
    assert_eq!(rule.get("format").and_then(|v| v.as_str()), Some("str"));
}

#[test]
fn rule_nested_mapping_values() {
    let rule: Rule = serde_yaml::from_str(
        r#"
normalization:
  maximum: 250
  minimum: 0
"#,
    )
    .unwrap();

    let norm = rule.get("normalization").unwrap().as_mapping().unwrap();
    assert_eq!(
        norm.get(serde_yaml::Value::String("maximum".into()))
            .and_then(|v| v.as_i64()),
        Some(250)
    );
}

#[test]
fn empty_rule_is_empty() {
    let rule = Rule::default();
    assert!(rule.is_empty());
    assert_eq!(rule.len(), 0);
    assert_eq!(rule.constraint_names().count(), 0);
}

#[test]
fn table_column_lookup() {
    let table = Table::new(
        vec!["code".into(), "name".into()],
        vec![
            vec!["FR".into(), "France".into()],
            vec!["DE".into(), "Germany".into()],
        ],
    );

    assert_eq!(table.len(), 2);
    assert_eq!(table.column("code"), Some(vec!["FR", "DE"]));
    assert_eq!(table.column("population"), None);
}
