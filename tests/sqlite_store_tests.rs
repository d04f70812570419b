use chrono::{TimeZone, Utc};
use rhousekeeper::core::Housekeeping;
use rhousekeeper::core::import::import_csv;
use rhousekeeper::core::layout::TableNames;
use rhousekeeper::core::reset::RESET_MARKER_KEY;
use rhousekeeper::db::initialize::{ROOMS_HEADER, ensure_tables, init_db};
use rhousekeeper::db::migrate::applied_versions;
use rhousekeeper::db::pool::DbPool;
use rhousekeeper::errors::AppError;
use rhousekeeper::models::patch::Patch;
use rhousekeeper::store::{Cell, MAX_ROW, PropertyStore, RawRow, RowStore};
use rhousekeeper::utils::clock::{FixedClock, Zone};

mod common;
use common::setup_test_db;

fn open(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

#[test]
fn test_migrations_are_recorded_once() {
    let db_path = setup_test_db("store_migrations");
    let pool = open(&db_path);
    init_db(&pool.conn).expect("second init is a no-op");

    let versions = applied_versions(&pool.conn).unwrap();
    assert_eq!(versions, vec!["0.1.0", "0.2.0", "0.3.0"]);
}

#[test]
fn test_missing_sheet_is_not_found() {
    let pool = open(&setup_test_db("store_missing"));

    assert!(!pool.table_exists("Rooms").unwrap());
    assert!(pool.read_table("Rooms").unwrap_err().is_not_found());
}

#[test]
fn test_cells_round_trip_through_sqlite() {
    let mut pool = open(&setup_test_db("store_cells"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();

    let when = Utc.with_ymd_and_hms(2026, 3, 7, 8, 15, 0).unwrap();
    pool.write_cell("Rooms", 3, 1, Cell::text("101")).unwrap();
    pool.write_cell("Rooms", 3, 2, Cell::Number(2.5)).unwrap();
    pool.write_cell("Rooms", 3, 4, Cell::DateTime(when)).unwrap();

    let rows = pool.read_table("Rooms").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], RawRow::from_strs(&ROOMS_HEADER));
    assert!(rows[1].cells.is_empty());
    assert_eq!(rows[2].cell(1), &Cell::text("101"));
    assert_eq!(rows[2].cell(2), &Cell::Number(2.5));
    assert_eq!(rows[2].cell(3), &Cell::Empty);
    assert_eq!(rows[2].cell(4), &Cell::DateTime(when));

    pool.clear_cell("Rooms", 3, 4).unwrap();
    pool.write_cell("Rooms", 3, 2, Cell::Empty).unwrap();
    let rows = pool.read_table("Rooms").unwrap();
    assert_eq!(rows[2].cells, vec![Cell::text("101")]);
    assert_eq!(pool.last_row("Rooms").unwrap(), 3);
}

#[test]
fn test_write_rejects_zero_address_and_unknown_sheet() {
    let mut pool = open(&setup_test_db("store_bad_address"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();

    assert!(pool.write_cell("Rooms", 0, 1, Cell::text("x")).is_err());
    assert!(
        pool.write_cell("Nope", 2, 1, Cell::text("x"))
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_truncate_keeps_sheet() {
    let mut pool = open(&setup_test_db("store_truncate"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();
    pool.write_cell("Staff", 2, 1, Cell::text("Ana")).unwrap();

    pool.truncate_table("Staff").unwrap();
    assert!(pool.table_exists("Staff").unwrap());
    assert!(pool.read_table("Staff").unwrap().is_empty());
    assert_eq!(pool.sheet_names().unwrap(), vec!["Area", "Rooms", "Staff"]);
}

#[test]
fn test_properties_upsert() {
    let mut pool = open(&setup_test_db("store_props"));

    assert_eq!(pool.get(RESET_MARKER_KEY).unwrap(), None);
    pool.set(RESET_MARKER_KEY, "2026-03-06").unwrap();
    pool.set(RESET_MARKER_KEY, "2026-03-07").unwrap();
    assert_eq!(
        pool.get(RESET_MARKER_KEY).unwrap().as_deref(),
        Some("2026-03-07")
    );
}

#[test]
fn test_board_on_sqlite_persists_across_connections() {
    let db_path = setup_test_db("store_board");
    {
        let mut pool = open(&db_path);
        ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();
        pool.write_cell("Rooms", 2, 1, Cell::text("1st Floor")).unwrap();
        pool.write_cell("Rooms", 3, 1, Cell::text("101")).unwrap();
        pool.write_cell("Rooms", 3, 2, Cell::text("Clean")).unwrap();
    }

    let zone = Zone::parse("UTC").unwrap();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap(), zone);
    let mut board = Housekeeping::new(open(&db_path), open(&db_path), &clock, TableNames::default());

    let snap = board
        .update_room(&Patch::for_row(3).status("In Progress").assign("Ana").time_in())
        .unwrap();
    assert_eq!(snap.rooms[0].floor, "1st Floor");
    assert_eq!(snap.rooms[0].status, "In Progress");
    assert_eq!(snap.rooms[0].time_in, "3/7/2026, 10:00:00 AM");
    drop(board);

    let mut reopened =
        Housekeeping::new(open(&db_path), open(&db_path), &clock, TableNames::default());
    let snap = reopened.get_snapshot().unwrap();
    assert_eq!(snap.rooms[0].assigned_to, "Ana");
    assert_eq!(
        reopened.props().get(RESET_MARKER_KEY).unwrap().as_deref(),
        Some("2026-03-07")
    );
}

#[test]
fn test_huge_row_id_is_rejected_and_board_stays_readable() {
    let db_path = setup_test_db("store_huge_row");
    {
        let mut pool = open(&db_path);
        ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();
        pool.write_cell("Rooms", 2, 1, Cell::text("101")).unwrap();
        pool.set(RESET_MARKER_KEY, "2026-03-07").unwrap();
    }

    let zone = Zone::parse("UTC").unwrap();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap(), zone);
    let mut board = Housekeeping::new(open(&db_path), open(&db_path), &clock, TableNames::default());

    let mut patch = Patch::for_row(2).status("Clean");
    patch.id = Some(i64::MAX);
    let err = board.update_room(&patch).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)), "{err}");

    assert_eq!(board.rows().last_row("Rooms").unwrap(), 2);
    let snap = board.get_snapshot().unwrap();
    assert_eq!(snap.rooms.len(), 1);
    assert_eq!(snap.rooms[0].status, "Dirty");
}

#[test]
fn test_cells_past_the_limits_are_refused_and_not_read() {
    let mut pool = open(&setup_test_db("store_limits"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();

    assert!(matches!(
        pool.write_cell("Rooms", MAX_ROW + 1, 1, Cell::text("x")),
        Err(AppError::InvalidArgument(_))
    ));

    // A stray cell written behind the store's back is ignored on read.
    pool.conn
        .execute(
            "INSERT INTO cells (sheet, row, col, kind, value) VALUES ('Rooms', ?1, 1, 'text', 'x')",
            [i64::MAX],
        )
        .unwrap();
    let rows = pool.read_table("Rooms").unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_import_replaces_table_in_one_go() {
    let mut pool = open(&setup_test_db("store_import"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();
    for row in 2..=9 {
        pool.write_cell("Staff", row, 1, Cell::text(format!("old {row}"))).unwrap();
    }

    let file = common::write_csv("store_import", "Name,Role\nAna,Housekeeper\n,\nBo,\n");
    let count = import_csv(&mut pool, "Staff", std::path::Path::new(&file)).unwrap();
    assert_eq!(count, 3);

    let rows = pool.read_table("Staff").unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], RawRow::from_strs(&["Name", "Role"]));
    assert_eq!(rows[1], RawRow::from_strs(&["Ana", "Housekeeper"]));
    assert!(rows[2].cells.is_empty());
    assert_eq!(rows[3], RawRow::from_strs(&["Bo"]));
}

#[test]
fn test_failed_import_keeps_previous_content() {
    let mut pool = open(&setup_test_db("store_import_empty"));
    ensure_tables(&mut pool, "Rooms", "Area", "Staff").unwrap();
    pool.write_cell("Staff", 2, 1, Cell::text("Ana")).unwrap();

    let file = common::write_csv("store_import_empty", "");
    assert!(import_csv(&mut pool, "Staff", std::path::Path::new(&file)).is_err());

    let rows = pool.read_table("Staff").unwrap();
    assert_eq!(rows[1].text(1), "Ana");
}
