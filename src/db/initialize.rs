use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::store::RowStore;
use rusqlite::Connection;

/// Column headers written into row 1 of each table.
pub const ROOMS_HEADER: [&str; 5] = ["Room", "Status", "Assigned To", "Time In", "Time Out"];
pub const AREAS_HEADER: [&str; 6] = [
    "Area",
    "Location",
    "Status",
    "Assigned To",
    "Time In",
    "Time Out",
];
pub const STAFF_HEADER: [&str; 2] = ["Name", "Role"];

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Create the three housekeeping tables (header row only) when missing.
pub fn ensure_tables<S: RowStore>(
    store: &mut S,
    rooms: &str,
    areas: &str,
    staff: &str,
) -> AppResult<()> {
    if !store.table_exists(rooms)? {
        store.create_table(rooms, &ROOMS_HEADER)?;
    }
    if !store.table_exists(areas)? {
        store.create_table(areas, &AREAS_HEADER)?;
    }
    if !store.table_exists(staff)? {
        store.create_table(staff, &STAFF_HEADER)?;
    }
    Ok(())
}
