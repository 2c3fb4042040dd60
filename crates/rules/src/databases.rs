//! Reference-database loading: small CSV lookup tables, all values as text.

use std::path::Path;

use indexmap::IndexMap;

use crate::discovery::{check_extension, discover_paths, FileKind};
use crate::error::Result;
use crate::schema::Table;

/// Ordered mapping from database name to its loaded table.
pub type Databases = IndexMap<String, Table>;

/// Load every reference database under `root/normalization/databases/`.
///
/// Each database lives in its own subdirectory; the directory name is the
/// database name. A file rejected by the extension guard is skipped with a
/// diagnostic and the remaining databases still load. A CSV read error on
/// an accepted file is fatal and propagates.
///
/// Tables are loaded fresh on every call; nothing is cached.
pub fn load_databases(root: &Path) -> Result<Databases> {
    let mut databases = Databases::new();
    for (name, path) in discover_paths(root, "databases") {
        if !check_extension(&path, FileKind::Database) {
            continue;
        }
        databases.insert(name, read_table(&path)?);
    }
    Ok(databases)
}

/// Read a comma-delimited table with a header row.
///
/// Every field is kept as a string; no type inference is applied. Column
/// order follows the header row.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(columns, rows))
}
