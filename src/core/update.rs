use crate::core::layout::StatusColumns;
use crate::errors::{AppError, AppResult};
use crate::models::patch::Patch;
use crate::store::{Cell, RowStore};
use crate::utils::clock::Clock;
use crate::utils::date::format_stamp;

/// Apply a patch to one row of a room or area table.
///
/// Order: status, assignment, time in (clears time out), time out, reset.
/// A reset in the same call therefore wins over the stamps. Rows past the
/// last used row are rejected before anything is written.
pub fn apply_patch<S, C>(
    store: &mut S,
    table: &str,
    cols: &StatusColumns,
    patch: &Patch,
    clock: &C,
) -> AppResult<usize>
where
    S: RowStore,
    C: Clock,
{
    let row = patch.row()?;

    if !store.table_exists(table)? {
        return Err(AppError::NotFound(table.to_string()));
    }

    let last = store.last_row(table)?;
    if row > last {
        return Err(AppError::InvalidArgument(format!(
            "Invalid row id {row}: '{table}' ends at row {last}"
        )));
    }

    store.write_cell(table, row, cols.status, Cell::text(patch.effective_status()))?;

    if let Some(who) = &patch.assigned_to {
        store.write_cell(table, row, cols.assigned_to, Cell::from(who.trim()))?;
    }

    if patch.set_time_in {
        let stamp = format_stamp(&clock.now());
        store.write_cell(table, row, cols.time_in, Cell::text(stamp))?;
        store.clear_cell(table, row, cols.time_out)?;
    }

    if patch.set_time_out {
        let stamp = format_stamp(&clock.now());
        store.write_cell(table, row, cols.time_out, Cell::text(stamp))?;
    }

    if patch.reset {
        store.clear_cell(table, row, cols.assigned_to)?;
        store.clear_cell(table, row, cols.time_in)?;
        store.clear_cell(table, row, cols.time_out)?;
    }

    Ok(row)
}
