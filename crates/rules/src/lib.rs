//! Metadata-column rule validation and reference-database loading.
//!
//! This crate provides:
//! - Discovery of rule files and reference databases under a normalization root
//! - A restricted-YAML rule parser that strips the leading comment header
//! - Structural validation of parsed rules against a packaged reference template
//! - An inverse index from constraint name to the columns that declare it
//! - Reference CSV tables loaded as string-typed rows
//!
//! Rules are declarative constraint sets for metadata columns (allowed blank
//! values, expected format, reference-database membership). Validation never
//! aborts on a nonconforming rule: structural mismatches and missing mandatory
//! constraints are collected as [`Issue`] and [`MissingMandatory`] records and
//! handed back to the caller, who decides what counts as failure.

pub mod databases;
pub mod discovery;
pub mod error;
pub mod index;
pub mod parser;
pub mod schema;
pub mod template;
pub mod validation;

pub use databases::{load_databases, read_table, Databases};
pub use discovery::{check_extension, discover_paths, FileKind};
pub use error::{Result, RuleError};
pub use index::rule_index;
pub use parser::parse_rule_file;
pub use schema::*;
pub use template::rules_template;
pub use validation::{load_rules, RulesOutcome, TemplateChecker, TraverseRules, MANDATORY_CONSTRAINTS};
