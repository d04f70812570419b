//! Raw row → entity mapping. Pure functions, no store access.

use crate::core::layout::{FIRST_DATA_ROW, areas, rooms, staff};
use crate::models::area::{Area, UNASSIGNED_LOCATION};
use crate::models::room::Room;
use crate::models::staff::Staff;
use crate::models::status::Status;
use crate::store::{Cell, RawRow};
use crate::utils::clock::Zone;
use crate::utils::date::format_stamp;

/// Result of mapping one row of the Rooms table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomRow {
    /// Structural row starting a new floor group.
    Floor(String),
    Room(Room),
    Skip,
}

/// Any column-A text containing "floor" (case-insensitive) is a header.
/// `Floor Suite 3` therefore counts as a header too.
pub fn is_floor_header(label: &str) -> bool {
    label.to_lowercase().contains("floor")
}

/// Time cells: structured values are formatted in `zone`, text is trimmed.
pub fn format_time_cell(cell: &Cell, zone: Zone) -> String {
    match cell {
        Cell::DateTime(dt) => format_stamp(&zone.convert(*dt)),
        other => other.as_string(),
    }
}

/// Status text exactly as stored; only a blank cell reads as `Dirty`.
fn status_or_default(cell: &Cell) -> String {
    match cell {
        c if c.is_blank() => Status::Dirty.as_str().to_string(),
        Cell::Text(s) => s.clone(),
        other => other.as_string(),
    }
}

pub fn map_room_row(raw: &RawRow, row_index: usize, current_floor: &str, zone: Zone) -> RoomRow {
    let label = raw.text(rooms::NUMBER);
    if label.is_empty() {
        return RoomRow::Skip;
    }
    if is_floor_header(&label) {
        return RoomRow::Floor(label);
    }

    RoomRow::Room(Room {
        id: row_index,
        room_number: label,
        floor: current_floor.to_string(),
        status: status_or_default(raw.cell(rooms::STATUS)),
        assigned_to: raw.text(rooms::ASSIGNED_TO),
        time_in: format_time_cell(raw.cell(rooms::TIME_IN), zone),
        time_out: format_time_cell(raw.cell(rooms::TIME_OUT), zone),
    })
}

/// Fold the Rooms table (header row included) into `(last floor, rooms)`.
pub fn fold_rooms(rows: &[RawRow], zone: Zone) -> (String, Vec<Room>) {
    rows.iter()
        .enumerate()
        .skip(FIRST_DATA_ROW - 1)
        .fold((String::new(), Vec::new()), |(floor, mut out), (i, raw)| {
            match map_room_row(raw, i + 1, &floor, zone) {
                RoomRow::Floor(label) => (label, out),
                RoomRow::Room(room) => {
                    out.push(room);
                    (floor, out)
                }
                RoomRow::Skip => (floor, out),
            }
        })
}

pub fn map_rooms(rows: &[RawRow], zone: Zone) -> Vec<Room> {
    fold_rooms(rows, zone).1
}

pub fn map_area_row(raw: &RawRow, row_index: usize, zone: Zone) -> Option<Area> {
    let name = raw.text(areas::NAME);
    if name.is_empty() {
        return None;
    }

    let location = raw.text(areas::LOCATION);
    Some(Area {
        id: row_index,
        name,
        location: if location.is_empty() {
            UNASSIGNED_LOCATION.to_string()
        } else {
            location
        },
        status: status_or_default(raw.cell(areas::STATUS)),
        assigned_to: raw.text(areas::ASSIGNED_TO),
        time_in: format_time_cell(raw.cell(areas::TIME_IN), zone),
        time_out: format_time_cell(raw.cell(areas::TIME_OUT), zone),
    })
}

pub fn map_areas(rows: &[RawRow], zone: Zone) -> Vec<Area> {
    rows.iter()
        .enumerate()
        .skip(FIRST_DATA_ROW - 1)
        .filter_map(|(i, raw)| map_area_row(raw, i + 1, zone))
        .collect()
}

pub fn map_staff_row(raw: &RawRow) -> Option<Staff> {
    let name = raw.text(staff::NAME);
    if name.is_empty() {
        return None;
    }
    Some(Staff {
        name,
        role: raw.text(staff::ROLE),
    })
}

pub fn map_staff(rows: &[RawRow]) -> Vec<Staff> {
    rows.iter()
        .skip(FIRST_DATA_ROW - 1)
        .filter_map(map_staff_row)
        .collect()
}

/// Physical rows of the Rooms table that hold a room (not blank, not a
/// floor header).
pub fn room_data_rows(rows: &[RawRow]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .skip(FIRST_DATA_ROW - 1)
        .filter(|(_, raw)| {
            let label = raw.text(rooms::NUMBER);
            !label.is_empty() && !is_floor_header(&label)
        })
        .map(|(i, _)| i + 1)
        .collect()
}

/// Physical rows of the Area table that hold a named area.
pub fn area_data_rows(rows: &[RawRow]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .skip(FIRST_DATA_ROW - 1)
        .filter(|(_, raw)| !raw.text(areas::NAME).is_empty())
        .map(|(i, _)| i + 1)
        .collect()
}
