use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Table, strip_ansi};
use ansi_term::Colour;

/// ANSI colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "reset" => Colour::Green,
        "reset_failed" => Colour::Red,
        "update_room" | "update_area" => Colour::Yellow,
        "repair" | "migration_applied" => Colour::Purple,
        "import" | "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Truncate to `max` visible characters, appending "...".
fn truncate(s: &str, max: usize) -> String {
    let visible = strip_ansi(s);
    if visible.chars().count() <= max {
        return visible;
    }
    let mut out: String = visible.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, limit: Option<usize>) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id DESC LIMIT ?1",
        )?;

        let max = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map([max], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        entries.reverse();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["#", "When", "Operation", "Target", "Message"]);
        for (id, date, operation, target, message) in entries {
            let colored = color_for_operation(&operation).paint(operation).to_string();
            table.add_row(vec![
                id.to_string(),
                date,
                colored,
                truncate(&target, 40),
                truncate(&message, 60),
            ]);
        }

        println!("📜 Internal log:\n");
        print!("{}", table.render());
        Ok(())
    }
}
