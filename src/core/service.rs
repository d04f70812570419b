//! API facade: the operations the front end calls.

use crate::core::AuditEntry;
use crate::core::layout::{AREA_COLUMNS, ROOM_COLUMNS, StatusColumns, TableNames};
use crate::core::repair;
use crate::core::reset::{GuardState, ResetGuard, ResetOutcome};
use crate::core::snapshot::build_snapshot;
use crate::core::update::apply_patch;
use crate::errors::AppResult;
use crate::models::patch::Patch;
use crate::models::snapshot::Snapshot;
use crate::store::{PropertyStore, RowStore};
use crate::ui::messages::warning;
use crate::utils::clock::Clock;

/// Housekeeping board backed by a row store, a property store for the
/// reset marker and a clock.
pub struct Housekeeping<S, P, C> {
    rows: S,
    props: P,
    clock: C,
    tables: TableNames,
    guard: ResetGuard,
    audit: Vec<AuditEntry>,
}

impl<S, P, C> Housekeeping<S, P, C>
where
    S: RowStore,
    P: PropertyStore,
    C: Clock,
{
    pub fn new(rows: S, props: P, clock: C, tables: TableNames) -> Self {
        Self {
            rows,
            props,
            clock,
            tables,
            guard: ResetGuard::new(),
            audit: Vec::new(),
        }
    }

    pub fn rows(&self) -> &S {
        &self.rows
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Audit entries recorded since the last call.
    pub fn take_audit(&mut self) -> Vec<AuditEntry> {
        std::mem::take(&mut self.audit)
    }

    fn record_reset(&mut self, outcome: &ResetOutcome, trigger: &str) {
        if let ResetOutcome::Reset { day, report } = outcome {
            self.audit.push(AuditEntry::new(
                "reset",
                trigger,
                format!(
                    "Daily reset for {day}: {} rooms, {} areas set to Dirty",
                    report.rooms, report.areas
                ),
            ));
        }
    }

    /// Fallback path: reset unless already done today.
    pub fn ensure_daily_reset(&mut self) -> AppResult<ResetOutcome> {
        let outcome = self.guard.ensure_daily_reset(
            &mut self.rows,
            &mut self.props,
            &self.clock,
            &self.tables,
        )?;
        self.record_reset(&outcome, "fallback");
        Ok(outcome)
    }

    /// Scheduled path: reset now, regardless of the marker.
    pub fn run_daily_reset(&mut self) -> AppResult<ResetOutcome> {
        let outcome = self.guard.run_daily_reset(
            &mut self.rows,
            &mut self.props,
            &self.clock,
            &self.tables,
        )?;
        self.record_reset(&outcome, "scheduled");
        Ok(outcome)
    }

    /// A failing guard must never hide the data: log and carry on.
    fn ensure_daily_reset_logged(&mut self) {
        if let Err(e) = self.ensure_daily_reset() {
            warning(format!("Daily reset check failed: {e}"));
            self.audit
                .push(AuditEntry::new("reset_failed", "fallback", e.to_string()));
        }
    }

    /// The single read entry point.
    pub fn get_snapshot(&mut self) -> AppResult<Snapshot> {
        self.ensure_daily_reset_logged();
        build_snapshot(&self.rows, &self.tables, self.clock.zone())
    }

    fn update(&mut self, table: String, cols: StatusColumns, patch: &Patch, op: &str) -> AppResult<Snapshot> {
        // Reset first, so the first write of a new day is not wiped by the
        // snapshot that follows it.
        self.ensure_daily_reset_logged();

        let row = apply_patch(&mut self.rows, &table, &cols, patch, &self.clock)?;
        self.audit.push(AuditEntry::new(
            op,
            &format!("{table}#{row}"),
            describe_patch(patch),
        ));

        self.get_snapshot()
    }

    pub fn update_room(&mut self, patch: &Patch) -> AppResult<Snapshot> {
        let table = self.tables.rooms.clone();
        self.update(table, ROOM_COLUMNS, patch, "update_room")
    }

    pub fn update_area(&mut self, patch: &Patch) -> AppResult<Snapshot> {
        let table = self.tables.areas.clone();
        self.update(table, AREA_COLUMNS, patch, "update_area")
    }

    /// Best-effort data migration of the Area time columns.
    pub fn repair_area_time_columns(&mut self) -> AppResult<usize> {
        let table = self.tables.areas.clone();
        let repaired =
            repair::repair_area_time_columns(&mut self.rows, &table, self.clock.zone())?;
        self.audit.push(AuditEntry::new(
            "repair",
            &table,
            format!("{repaired} area rows repaired"),
        ));
        Ok(repaired)
    }
}

fn describe_patch(patch: &Patch) -> String {
    let mut parts = vec![format!("status={}", patch.effective_status())];
    if let Some(who) = &patch.assigned_to {
        parts.push(format!("assigned_to='{}'", who.trim()));
    }
    if patch.set_time_in {
        parts.push("time_in".into());
    }
    if patch.set_time_out {
        parts.push("time_out".into());
    }
    if patch.reset {
        parts.push("reset".into());
    }
    parts.join(", ")
}
