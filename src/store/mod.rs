//! Row store abstraction.
//!
//! A row store is a set of named tables addressed by 1-based row and
//! column indexes, the way a spreadsheet is. Row 1 of every table holds the
//! column headers, data starts at row 2.

pub mod memory;

use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use memory::{MemoryPropertyStore, MemoryRowStore};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// Structured date/time value (an instant, kept in UTC).
    DateTime(DateTime<Utc>),
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// Empty cells and whitespace-only text both count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Display form of the cell, trimmed. Dates render as RFC 3339.
    pub fn as_string(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::DateTime(dt) => dt.to_rfc3339(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

/// One row as read from the store. Index 0 is column A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub cells: Vec<Cell>,
}

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Convenience constructor used by seeding and tests.
    pub fn from_strs(values: &[&str]) -> Self {
        Self {
            cells: values.iter().map(|v| Cell::from(*v)).collect(),
        }
    }

    /// Cell at a 1-based column; columns past the end read as empty.
    pub fn cell(&self, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        if col == 0 {
            return &EMPTY;
        }
        self.cells.get(col - 1).unwrap_or(&EMPTY)
    }

    /// Trimmed string value at a 1-based column.
    pub fn text(&self, col: usize) -> String {
        self.cell(col).as_string()
    }
}

/// Highest row index a store accepts (the row limit of a spreadsheet).
pub const MAX_ROW: usize = 1_048_576;

/// Highest column index a store accepts.
pub const MAX_COL: usize = 16_384;

/// Tabular backing store.
///
/// `read_table` returns every row from row 1 (the header) to the last used
/// row, so `rows[i]` is physical row `i + 1`. Writes are visible to the
/// next read.
pub trait RowStore {
    fn table_exists(&self, table: &str) -> AppResult<bool>;

    /// Last used row, header included (0 for an empty table).
    fn last_row(&self, table: &str) -> AppResult<usize>;

    /// Fails with `AppError::NotFound` if the table does not exist.
    fn read_table(&self, table: &str) -> AppResult<Vec<RawRow>>;

    fn write_cell(&mut self, table: &str, row: usize, col: usize, value: Cell) -> AppResult<()>;

    fn clear_cell(&mut self, table: &str, row: usize, col: usize) -> AppResult<()>;

    /// Create the table (if missing) and write the header into row 1.
    fn create_table(&mut self, table: &str, header: &[&str]) -> AppResult<()>;

    /// Drop every row of an existing table, header included.
    fn truncate_table(&mut self, table: &str) -> AppResult<()>;

    /// Replace the whole content of `table` (created if missing) with a
    /// header and data rows starting at row 2. Empty cells are skipped.
    fn replace_table(&mut self, table: &str, header: &[&str], rows: &[RawRow]) -> AppResult<()> {
        if self.table_exists(table)? {
            self.truncate_table(table)?;
        }
        self.create_table(table, header)?;
        for (i, raw) in rows.iter().enumerate() {
            for (j, cell) in raw.cells.iter().enumerate() {
                if !cell.is_blank() {
                    self.write_cell(table, i + 2, j + 1, cell.clone())?;
                }
            }
        }
        Ok(())
    }
}

/// Key/value store for small persisted markers.
pub trait PropertyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
