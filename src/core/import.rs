//! Seed a table from a CSV file.

use crate::errors::{AppError, AppResult};
use crate::store::{Cell, RawRow, RowStore};
use std::path::Path;

/// Replace `table` with the CSV content. The first CSV record becomes the
/// header row. Returns the number of data rows written.
pub fn import_csv<S: RowStore>(store: &mut S, table: &str, path: &Path) -> AppResult<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;
        records.push(rec);
    }

    let Some((header, data)) = records.split_first() else {
        return Err(AppError::Import(format!(
            "{}: file is empty, a header row is required",
            path.display()
        )));
    };

    let head: Vec<&str> = header.iter().map(str::trim).collect();
    let rows: Vec<RawRow> = data
        .iter()
        .map(|rec| RawRow::new(rec.iter().map(|v| Cell::from(v.trim())).collect()))
        .collect();

    store.replace_table(table, &head, &rows)?;

    Ok(rows.len())
}
