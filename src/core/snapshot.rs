use crate::core::layout::TableNames;
use crate::core::mapper::{map_areas, map_rooms, map_staff};
use crate::errors::AppResult;
use crate::models::snapshot::{Counts, Snapshot};
use crate::store::{RawRow, RowStore};
use crate::utils::clock::Zone;

/// Read a table for display; a missing table reads as empty.
pub fn read_or_empty<S: RowStore>(store: &S, table: &str) -> AppResult<Vec<RawRow>> {
    match store.read_table(table) {
        Ok(rows) => Ok(rows),
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Read and map all three tables, then count statuses.
pub fn build_snapshot<S: RowStore>(store: &S, tables: &TableNames, zone: Zone) -> AppResult<Snapshot> {
    let staff = map_staff(&read_or_empty(store, &tables.staff)?);
    let areas = map_areas(&read_or_empty(store, &tables.areas)?, zone);
    let rooms = map_rooms(&read_or_empty(store, &tables.rooms)?, zone);
    let counts = Counts::compute(&rooms, &areas);

    Ok(Snapshot {
        staff,
        areas,
        rooms,
        counts,
    })
}
