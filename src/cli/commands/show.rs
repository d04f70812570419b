use crate::cli::commands::{flush, open_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::snapshot::Snapshot;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { json } = cmd {
        let mut board = open_board(cfg)?;
        let result = board.get_snapshot();
        flush(&mut board);
        output(&result?, *json)?;
    }
    Ok(())
}

/// Print the board either as JSON or as human readable tables.
pub(crate) fn output(snapshot: &Snapshot, json: bool) -> AppResult<()> {
    if json {
        let text = serde_json::to_string_pretty(snapshot)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
        println!("{text}");
    } else {
        print_snapshot(snapshot);
    }
    Ok(())
}

fn colored_status(status: &str) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

pub(crate) fn print_snapshot(s: &Snapshot) {
    let c = &s.counts;

    header(format!(
        "Rooms: {} total | {} dirty | {} in progress | {} clean",
        c.total_rooms, c.dirty_rooms, c.in_progress_rooms, c.clean_rooms
    ));
    let mut rooms = Table::new(&["#", "Room", "Floor", "Status", "Assigned", "In", "Out"]);
    for r in &s.rooms {
        rooms.add_row(vec![
            r.id.to_string(),
            r.room_number.clone(),
            colorize_optional(&r.floor),
            colored_status(&r.status),
            colorize_optional(&r.assigned_to),
            colorize_optional(&r.time_in),
            colorize_optional(&r.time_out),
        ]);
    }
    println!("{}", rooms.render());

    header(format!(
        "Areas: {} total | {} dirty | {} in progress | {} clean",
        c.total_areas, c.dirty_areas, c.in_progress_areas, c.clean_areas
    ));
    let mut areas = Table::new(&["#", "Area", "Location", "Status", "Assigned", "In", "Out"]);
    for a in &s.areas {
        areas.add_row(vec![
            a.id.to_string(),
            a.name.clone(),
            a.location.clone(),
            colored_status(&a.status),
            colorize_optional(&a.assigned_to),
            colorize_optional(&a.time_in),
            colorize_optional(&a.time_out),
        ]);
    }
    println!("{}", areas.render());

    header(format!("Staff: {}", s.staff.len()));
    let mut staff = Table::new(&["Name", "Role"]);
    for m in &s.staff {
        staff.add_row(vec![m.name.clone(), colorize_optional(&m.role)]);
    }
    println!("{}", staff.render());
}
