//! Once-per-calendar-day reset of every room and area to `Dirty`.
//!
//! Two paths can trigger it: the scheduled `reset` command and the
//! fallback check run before every snapshot. Both may observe a stale
//! marker at the same time; the reset body only ever writes "Dirty" and
//! blanks, so running it twice leaves the same state as running it once.

use crate::core::layout::{AREA_COLUMNS, ROOM_COLUMNS, StatusColumns, TableNames};
use crate::core::mapper::{area_data_rows, room_data_rows};
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::store::{Cell, PropertyStore, RawRow, RowStore};
use crate::utils::clock::Clock;
use crate::utils::date::{marker_string, parse_marker};
use chrono::NaiveDate;

/// Property key of the persisted reset marker.
pub const RESET_MARKER_KEY: &str = "lastResetDate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    CheckedToday,
    Resetting,
    Done,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub rooms: usize,
    pub areas: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Marker already equals today.
    AlreadyDone { day: NaiveDate },
    /// Marker is ahead of today (clock moved backwards); nothing touched.
    MarkerAhead { marker: NaiveDate, today: NaiveDate },
    Reset { day: NaiveDate, report: ResetReport },
}

/// Rewrite one row's status block to the reset state, skipping cells that
/// already hold the target value.
fn reset_row<S: RowStore>(
    store: &mut S,
    table: &str,
    row: usize,
    raw: &RawRow,
    cols: &StatusColumns,
) -> AppResult<()> {
    let dirty = Cell::text(Status::Dirty.as_str());
    if *raw.cell(cols.status) != dirty {
        store.write_cell(table, row, cols.status, dirty)?;
    }
    for col in [cols.assigned_to, cols.time_in, cols.time_out] {
        if *raw.cell(col) != Cell::Empty {
            store.clear_cell(table, row, col)?;
        }
    }
    Ok(())
}

fn reset_table<S, F>(store: &mut S, table: &str, cols: &StatusColumns, select: F) -> AppResult<usize>
where
    S: RowStore,
    F: Fn(&[RawRow]) -> Vec<usize>,
{
    if !store.table_exists(table)? {
        return Ok(0);
    }
    let rows = store.read_table(table)?;
    let targets = select(&rows);

    for row in &targets {
        reset_row(store, table, *row, &rows[row - 1], cols)?;
    }
    Ok(targets.len())
}

/// Reset every room row (floor headers and blank rows are left alone).
pub fn reset_rooms<S: RowStore>(store: &mut S, table: &str) -> AppResult<usize> {
    reset_table(store, table, &ROOM_COLUMNS, room_data_rows)
}

/// Reset every named area row.
pub fn reset_areas<S: RowStore>(store: &mut S, table: &str) -> AppResult<usize> {
    reset_table(store, table, &AREA_COLUMNS, area_data_rows)
}

pub fn full_reset<S: RowStore>(store: &mut S, tables: &TableNames) -> AppResult<ResetReport> {
    let rooms = reset_rooms(store, &tables.rooms)?;
    let areas = reset_areas(store, &tables.areas)?;
    Ok(ResetReport { rooms, areas })
}

/// Current marker, if present and well formed.
pub fn read_marker<P: PropertyStore>(props: &P) -> AppResult<Option<NaiveDate>> {
    Ok(props
        .get(RESET_MARKER_KEY)?
        .as_deref()
        .and_then(parse_marker))
}

/// Store `day` as the marker unless the stored one is already later.
/// Returns whether the marker was written.
pub fn advance_marker<P: PropertyStore>(props: &mut P, day: NaiveDate) -> AppResult<bool> {
    match read_marker(props)? {
        Some(current) if current >= day => Ok(false),
        _ => {
            props.set(RESET_MARKER_KEY, &marker_string(day))?;
            Ok(true)
        }
    }
}

#[derive(Debug)]
pub struct ResetGuard {
    state: GuardState,
}

impl Default for ResetGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Unknown,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Reset the tables unless the marker says it already happened today.
    pub fn ensure_daily_reset<S, P, C>(
        &mut self,
        store: &mut S,
        props: &mut P,
        clock: &C,
        tables: &TableNames,
    ) -> AppResult<ResetOutcome>
    where
        S: RowStore,
        P: PropertyStore,
        C: Clock,
    {
        let today = clock.today();
        let marker = read_marker(props)?;

        match marker {
            Some(m) if m == today => {
                self.state = GuardState::CheckedToday;
                Ok(ResetOutcome::AlreadyDone { day: today })
            }
            Some(m) if m > today => {
                self.state = GuardState::CheckedToday;
                Ok(ResetOutcome::MarkerAhead {
                    marker: m,
                    today,
                })
            }
            _ => self.reset_now(store, props, today, tables),
        }
    }

    /// Unconditional reset for the scheduled path. The marker still only
    /// moves forward.
    pub fn run_daily_reset<S, P, C>(
        &mut self,
        store: &mut S,
        props: &mut P,
        clock: &C,
        tables: &TableNames,
    ) -> AppResult<ResetOutcome>
    where
        S: RowStore,
        P: PropertyStore,
        C: Clock,
    {
        self.reset_now(store, props, clock.today(), tables)
    }

    fn reset_now<S, P>(
        &mut self,
        store: &mut S,
        props: &mut P,
        today: NaiveDate,
        tables: &TableNames,
    ) -> AppResult<ResetOutcome>
    where
        S: RowStore,
        P: PropertyStore,
    {
        self.state = GuardState::Resetting;

        let result = full_reset(store, tables).and_then(|report| {
            advance_marker(props, today)?;
            Ok(report)
        });

        match result {
            Ok(report) => {
                self.state = GuardState::Done;
                Ok(ResetOutcome::Reset { day: today, report })
            }
            Err(e) => {
                self.state = GuardState::Unknown;
                Err(e)
            }
        }
    }
}
