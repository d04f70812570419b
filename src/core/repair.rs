//! Best-effort clean-up of the Area time columns.
//!
//! Two kinds of damage are fixed:
//! - rows written by an older layout, where assignment and times sit one
//!   column to the right (time out spilled into column G);
//! - structured date values in the time columns, rewritten as stamp text.

use crate::core::layout::{FIRST_DATA_ROW, areas};
use crate::errors::AppResult;
use crate::store::{Cell, RawRow, RowStore};
use crate::utils::clock::Zone;
use crate::utils::date::{format_stamp, looks_like_timestamp};

fn is_shifted(raw: &RawRow) -> bool {
    let spill = raw.cell(areas::SPILL);
    let spilled_stamp = match spill {
        Cell::DateTime(_) => true,
        Cell::Text(s) => looks_like_timestamp(s),
        _ => false,
    };
    spilled_stamp && raw.cell(areas::ASSIGNED_TO).is_blank()
}

/// Returns the number of rows that were changed.
pub fn repair_area_time_columns<S: RowStore>(
    store: &mut S,
    table: &str,
    zone: Zone,
) -> AppResult<usize> {
    let rows = store.read_table(table)?;
    let mut repaired = 0;

    for (i, raw) in rows.iter().enumerate().skip(FIRST_DATA_ROW - 1) {
        if raw.text(areas::NAME).is_empty() {
            continue;
        }
        let row = i + 1;

        // Working copy of D..F after an optional left shift.
        let mut assigned = raw.cell(areas::ASSIGNED_TO).clone();
        let mut time_in = raw.cell(areas::TIME_IN).clone();
        let mut time_out = raw.cell(areas::TIME_OUT).clone();
        let mut changed = false;

        if is_shifted(raw) {
            assigned = raw.cell(areas::TIME_IN).clone();
            time_in = raw.cell(areas::TIME_OUT).clone();
            time_out = raw.cell(areas::SPILL).clone();
            store.clear_cell(table, row, areas::SPILL)?;
            changed = true;
        }

        for cell in [&mut time_in, &mut time_out] {
            if let Cell::DateTime(dt) = *cell {
                *cell = Cell::text(format_stamp(&zone.convert(dt)));
                changed = true;
            }
        }

        if changed {
            store.write_cell(table, row, areas::ASSIGNED_TO, assigned)?;
            store.write_cell(table, row, areas::TIME_IN, time_in)?;
            store.write_cell(table, row, areas::TIME_OUT, time_out)?;
            repaired += 1;
        }
    }

    Ok(repaired)
}
