use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Flush a batch of audit entries, warning (not failing) on write errors.
pub fn flush_audit(conn: &Connection, entries: &[crate::core::AuditEntry]) {
    for e in entries {
        if let Err(err) = ttlog(conn, &e.operation, &e.target, &e.message) {
            crate::ui::messages::warning(format!("Failed to write internal log: {err}"));
        }
    }
}
