//! Rule-file parser: comment-header stripping plus YAML deserialization.
//!
//! Every rule file starts with a contiguous block of `#` comment lines
//! describing the column; the structured YAML mapping follows. Parsing
//! locates the end of that header and deserializes the remainder.

use std::fs;
use std::path::Path;

use crate::discovery::{check_extension, FileKind};
use crate::error::{Result, RuleError};
use crate::schema::Rule;

/// Parse one rule file into a [`Rule`].
///
/// Behavior:
/// - wrong extension: warn and return an empty rule (soft skip)
/// - no comment line anywhere in the file: [`RuleError::MissingHeader`].
///   Callers must guarantee at least one leading comment line per file.
/// - malformed YAML after the header: [`RuleError::Yaml`], propagated
pub fn parse_rule_file(path: &Path) -> Result<Rule> {
    if !check_extension(path, FileKind::Rule) {
        return Ok(Rule::default());
    }

    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();

    let last_comment =
        header_end(&lines).ok_or_else(|| RuleError::MissingHeader(path.to_path_buf()))?;

    let body = lines[last_comment + 1..].join("\n");
    if body.trim().is_empty() {
        return Ok(Rule::default());
    }
    Ok(serde_yaml::from_str(&body)?)
}

/// Index of the last comment line in the file, or `None` if there is none.
///
/// The header ends at the LAST comment line, wherever it sits: every line up
/// to and including that index is dropped before YAML parsing, even
/// non-comment lines that precede it. This is a positional skip, not a
/// comment filter, and downstream behavior relies on these exact semantics.
/// A comment line is one whose first non-whitespace character is `#`.
fn header_end(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .rposition(|line| line.trim_start().starts_with('#'))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn write_rule(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn strips_leading_comment_block() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(
            &dir,
            "country.yml",
            "# Rules for the country column.\n# Allowed blanks and format.\nblank:\n  - Missing\nformat: str\n",
        );

        let rule = parse_rule_file(&path).unwrap();
        assert_eq!(rule.len(), 2);
        assert!(rule.contains("blank"));
        assert!(rule.contains("format"));
    }

    #[test]
    fn indented_comment_counts_as_header() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(&dir, "a.yml", "   # indented header\nformat: str\n");

        let rule = parse_rule_file(&path).unwrap();
        assert_eq!(rule.get("format").and_then(|v| v.as_str()), Some("str"));
    }

    #[test]
    fn zero_comment_lines_fails_hard() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(&dir, "bare.yml", "blank: []\nformat: str\n");

        let err = parse_rule_file(&path).unwrap_err();
        assert!(matches!(err, RuleError::MissingHeader(_)));
    }

    #[test]
    fn interleaved_comment_drops_everything_before_it() {
        // The skip is positional: content sitting before the last comment
        // line is discarded along with the header.
        let dir = TempDir::new().unwrap();
        let path = write_rule(
            &dir,
            "mixed.yml",
            "# header\nblank: []\n# trailing note\nformat: str\n",
        );

        let rule = parse_rule_file(&path).unwrap();
        assert!(!rule.contains("blank"));
        assert_eq!(rule.get("format").and_then(|v| v.as_str()), Some("str"));
    }

    #[test]
    fn wrong_extension_returns_empty_rule() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(&dir, "country.csv", "# header\nformat: str\n");

        let rule = parse_rule_file(&path).unwrap();
        assert!(rule.is_empty());
    }

    #[test]
    fn comment_only_file_returns_empty_rule() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(&dir, "empty.yml", "# header only\n");

        let rule = parse_rule_file(&path).unwrap();
        assert!(rule.is_empty());
    }

    #[test]
    fn malformed_yaml_propagates() {
        let dir = TempDir::new().unwrap();
        let path = write_rule(&dir, "bad.yml", "# header\nthis: is: not: valid: [[[\n");

        let err = parse_rule_file(&path).unwrap_err();
        assert!(matches!(err, RuleError::Yaml(_)));
    }

    #[test]
    fn header_end_positions() {
        assert_eq!(header_end(&["# a", "x: 1"]), Some(0));
        assert_eq!(header_end(&["# a", "x: 1", "# b", "y: 2"]), Some(2));
        assert_eq!(header_end(&["x: 1", "y: 2"]), None);
        assert_eq!(header_end(&[]), None);
    }
}
