//! SQLite-backed workbook: every table is a sheet, every non-empty cell a
//! row of the `cells` table.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::{Cell, MAX_COL, MAX_ROW, RawRow, RowStore};
use chrono::{DateTime, Local, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, params};

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

fn encode(cell: &Cell) -> Option<(&'static str, String)> {
    match cell {
        Cell::Empty => None,
        Cell::Text(s) => Some(("text", s.clone())),
        Cell::Number(n) => Some(("number", n.to_string())),
        Cell::DateTime(dt) => Some(("datetime", dt.to_rfc3339())),
    }
}

fn decode(kind: &str, value: String) -> rusqlite::Result<Cell> {
    match kind {
        "text" => Ok(Cell::Text(value)),
        "number" => value
            .parse::<f64>()
            .map(Cell::Number)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))),
        "datetime" => DateTime::parse_from_rfc3339(&value)
            .map(|dt| Cell::DateTime(dt.with_timezone(&Utc)))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))),
        other => Err(rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            Box::new(AppError::Other(format!("Unknown cell kind: {other}"))),
        )),
    }
}

impl DbPool {
    fn require_sheet(&self, table: &str) -> AppResult<()> {
        if self.table_exists(table)? {
            Ok(())
        } else {
            Err(AppError::NotFound(table.to_string()))
        }
    }

    /// Names of every sheet in the workbook.
    pub fn sheet_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM sheets ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl RowStore for DbPool {
    fn last_row(&self, table: &str) -> AppResult<usize> {
        self.require_sheet(table)?;
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(row) FROM cells WHERE sheet = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(max.unwrap_or(0) as usize)
    }

    fn table_exists(&self, table: &str) -> AppResult<bool> {
        let found: Option<String> = self
            .conn
            .query_row("SELECT name FROM sheets WHERE name = ?1", [table], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn read_table(&self, table: &str) -> AppResult<Vec<RawRow>> {
        self.require_sheet(table)?;

        let mut stmt = self.conn.prepare_cached(
            "SELECT row, col, kind, value FROM cells
             WHERE sheet = ?1 AND row <= ?2 AND col <= ?3
             ORDER BY row ASC, col ASC",
        )?;

        // Cells past the limits cannot be addressed and are not read back.
        let cells = stmt.query_map(params![table, MAX_ROW as i64, MAX_COL as i64], |row| {
            let r: i64 = row.get(0)?;
            let c: i64 = row.get(1)?;
            let kind: String = row.get(2)?;
            let value: String = row.get(3)?;
            Ok((r as usize, c as usize, decode(&kind, value)?))
        })?;

        let mut rows: Vec<RawRow> = Vec::new();
        for item in cells {
            let (r, c, cell) = item?;
            if rows.len() < r {
                rows.resize_with(r, RawRow::default);
            }
            let target = &mut rows[r - 1].cells;
            if target.len() < c {
                target.resize(c, Cell::Empty);
            }
            target[c - 1] = cell;
        }

        Ok(rows)
    }

    fn write_cell(&mut self, table: &str, row: usize, col: usize, value: Cell) -> AppResult<()> {
        check_address(row, col)?;
        self.require_sheet(table)?;

        match encode(&value) {
            None => {
                self.conn.execute(
                    "DELETE FROM cells WHERE sheet = ?1 AND row = ?2 AND col = ?3",
                    params![table, row as i64, col as i64],
                )?;
            }
            Some((kind, text)) => {
                self.conn.execute(
                    "INSERT INTO cells (sheet, row, col, kind, value)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(sheet, row, col)
                     DO UPDATE SET kind = excluded.kind, value = excluded.value",
                    params![table, row as i64, col as i64, kind, text],
                )?;
            }
        }
        Ok(())
    }

    fn clear_cell(&mut self, table: &str, row: usize, col: usize) -> AppResult<()> {
        self.write_cell(table, row, col, Cell::Empty)
    }

    fn create_table(&mut self, table: &str, header: &[&str]) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT OR IGNORE INTO sheets (name, created_at) VALUES (?1, ?2)",
            params![table, Local::now().to_rfc3339()],
        )?;
        tx.execute(
            "DELETE FROM cells WHERE sheet = ?1 AND row = 1",
            params![table],
        )?;
        for (i, h) in header.iter().enumerate() {
            if h.is_empty() {
                continue;
            }
            tx.execute(
                "INSERT INTO cells (sheet, row, col, kind, value) VALUES (?1, 1, ?2, 'text', ?3)",
                params![table, (i + 1) as i64, h],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn truncate_table(&mut self, table: &str) -> AppResult<()> {
        self.require_sheet(table)?;
        self.conn
            .execute("DELETE FROM cells WHERE sheet = ?1", [table])?;
        Ok(())
    }

    /// Single transaction: a failure leaves the previous content in place.
    fn replace_table(&mut self, table: &str, header: &[&str], rows: &[RawRow]) -> AppResult<()> {
        for (i, raw) in rows.iter().enumerate() {
            check_address(i + 2, raw.cells.len().max(1))?;
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT OR IGNORE INTO sheets (name, created_at) VALUES (?1, ?2)",
            params![table, Local::now().to_rfc3339()],
        )?;
        tx.execute("DELETE FROM cells WHERE sheet = ?1", [table])?;

        {
            let mut insert = tx.prepare_cached(
                "INSERT INTO cells (sheet, row, col, kind, value) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;

            for (i, h) in header.iter().enumerate() {
                if !h.is_empty() {
                    insert.execute(params![table, 1_i64, (i + 1) as i64, "text", h])?;
                }
            }

            for (i, raw) in rows.iter().enumerate() {
                for (j, cell) in raw.cells.iter().enumerate() {
                    if cell.is_blank() {
                        continue;
                    }
                    if let Some((kind, text)) = encode(cell) {
                        insert.execute(params![
                            table,
                            (i + 2) as i64,
                            (j + 1) as i64,
                            kind,
                            text
                        ])?;
                    }
                }
            }
        }

        tx.commit()?;
        Ok(())
    }
}
