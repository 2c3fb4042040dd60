//! Core data model for metadata-column rules.
//!
//! - [`Rule`]: ordered constraint-name → value mapping parsed from one file
//! - [`RuleSet`] / [`RuleIndex`]: the column→rule map and its inverse
//! - [`Issue`] / [`MissingMandatory`]: accumulated validation records
//! - [`Table`]: a string-typed delimited table (metadata or reference database)

mod issue;
mod rule;
mod table;

pub use issue::*;
pub use rule::*;
pub use table::*;

#[cfg(test)]
mod tests;
