use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, identified by the version that introduced it.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "0.1.0",
        description: "Created sheets and cells tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sheets (
            name       TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cells (
            sheet TEXT    NOT NULL,
            row   INTEGER NOT NULL CHECK (row >= 1),
            col   INTEGER NOT NULL CHECK (col >= 1),
            kind  TEXT    NOT NULL CHECK (kind IN ('text','number','datetime')),
            value TEXT    NOT NULL,
            PRIMARY KEY (sheet, row, col)
        );
        "#,
    },
    Migration {
        version: "0.2.0",
        description: "Created properties table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS properties (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "0.3.0",
        description: "Added row index on cells",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_cells_sheet_row ON cells(sheet, row);
        "#,
    },
];

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
            [version],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Versions already applied to this database, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Each step runs in its own transaction together with its log marker,
/// so a failed step leaves no partial schema behind.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
