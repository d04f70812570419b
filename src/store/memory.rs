//! In-memory row and property stores (used by tests and dry runs).

use super::{Cell, MAX_COL, MAX_ROW, PropertyStore, RawRow, RowStore};
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryRowStore {
    tables: HashMap<String, Vec<RawRow>>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a whole table with the given rows (row 1 = header).
    pub fn with_table(mut self, table: &str, rows: Vec<RawRow>) -> Self {
        self.tables.insert(table.to_string(), rows);
        self
    }

    fn table_mut(&mut self, table: &str) -> AppResult<&mut Vec<RawRow>> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| AppError::NotFound(table.to_string()))
    }
}

fn check_address(row: usize, col: usize) -> AppResult<()> {
    if row == 0 || col == 0 {
        return Err(AppError::InvalidArgument(format!(
            "cell address is 1-based, got row {row} col {col}"
        )));
    }
    if row > MAX_ROW || col > MAX_COL {
        return Err(AppError::InvalidArgument(format!(
            "cell row {row} col {col} is past the limits ({MAX_ROW} rows, {MAX_COL} columns)"
        )));
    }
    Ok(())
}

impl RowStore for MemoryRowStore {
    fn table_exists(&self, table: &str) -> AppResult<bool> {
        Ok(self.tables.contains_key(table))
    }

    fn last_row(&self, table: &str) -> AppResult<usize> {
        self.tables
            .get(table)
            .map(Vec::len)
            .ok_or_else(|| AppError::NotFound(table.to_string()))
    }

    fn read_table(&self, table: &str) -> AppResult<Vec<RawRow>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| AppError::NotFound(table.to_string()))
    }

    fn write_cell(&mut self, table: &str, row: usize, col: usize, value: Cell) -> AppResult<()> {
        check_address(row, col)?;
        let rows = self.table_mut(table)?;

        if rows.len() < row {
            rows.resize_with(row, RawRow::default);
        }
        let cells = &mut rows[row - 1].cells;
        if cells.len() < col {
            cells.resize(col, Cell::Empty);
        }
        cells[col - 1] = value;
        Ok(())
    }

    fn clear_cell(&mut self, table: &str, row: usize, col: usize) -> AppResult<()> {
        check_address(row, col)?;
        let rows = self.table_mut(table)?;

        if let Some(r) = rows.get_mut(row - 1)
            && let Some(c) = r.cells.get_mut(col - 1)
        {
            *c = Cell::Empty;
        }
        Ok(())
    }

    fn create_table(&mut self, table: &str, header: &[&str]) -> AppResult<()> {
        let rows = self.tables.entry(table.to_string()).or_default();
        let head = RawRow::from_strs(header);
        if rows.is_empty() {
            rows.push(head);
        } else {
            rows[0] = head;
        }
        Ok(())
    }

    fn truncate_table(&mut self, table: &str) -> AppResult<()> {
        self.table_mut(table)?.clear();
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPropertyStore {
    values: HashMap<String, String>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
