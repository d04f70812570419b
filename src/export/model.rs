use crate::models::snapshot::Snapshot;
use serde::Serialize;

/// Flat row for exports: rooms and areas share one sheet.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BoardExport {
    pub kind: String,
    pub id: usize,
    pub name: String,
    /// Floor for rooms, location for areas.
    pub group: String,
    pub status: String,
    pub assigned_to: String,
    pub time_in: String,
    pub time_out: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "kind",
        "id",
        "name",
        "group",
        "status",
        "assigned_to",
        "time_in",
        "time_out",
    ]
}

pub(crate) fn board_to_row(e: &BoardExport) -> Vec<String> {
    vec![
        e.kind.clone(),
        e.id.to_string(),
        e.name.clone(),
        e.group.clone(),
        e.status.clone(),
        e.assigned_to.clone(),
        e.time_in.clone(),
        e.time_out.clone(),
    ]
}

/// Rooms first, then areas, each in table order.
pub fn flatten(snapshot: &Snapshot) -> Vec<BoardExport> {
    let rooms = snapshot.rooms.iter().map(|r| BoardExport {
        kind: "room".into(),
        id: r.id,
        name: r.room_number.clone(),
        group: r.floor.clone(),
        status: r.status.clone(),
        assigned_to: r.assigned_to.clone(),
        time_in: r.time_in.clone(),
        time_out: r.time_out.clone(),
    });
    let areas = snapshot.areas.iter().map(|a| BoardExport {
        kind: "area".into(),
        id: a.id,
        name: a.name.clone(),
        group: a.location.clone(),
        status: a.status.clone(),
        assigned_to: a.assigned_to.clone(),
        time_in: a.time_in.clone(),
        time_out: a.time_out.clone(),
    });
    rooms.chain(areas).collect()
}
