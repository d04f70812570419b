use super::{area::Area, room::Room, staff::Staff, status::Status};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub total_rooms: usize,
    pub dirty_rooms: usize,
    pub in_progress_rooms: usize,
    pub clean_rooms: usize,
    pub total_areas: usize,
    pub dirty_areas: usize,
    pub in_progress_areas: usize,
    pub clean_areas: usize,
}

/// Per-status tally using exact string equality; unknown strings count
/// toward the total only.
fn tally<'a, I>(statuses: I) -> (usize, usize, usize, usize)
where
    I: Iterator<Item = &'a str>,
{
    statuses.fold((0, 0, 0, 0), |(total, d, p, c), s| {
        match Status::from_cell(s) {
            Some(Status::Dirty) => (total + 1, d + 1, p, c),
            Some(Status::InProgress) => (total + 1, d, p + 1, c),
            Some(Status::Clean) => (total + 1, d, p, c + 1),
            None => (total + 1, d, p, c),
        }
    })
}

impl Counts {
    pub fn compute(rooms: &[Room], areas: &[Area]) -> Self {
        let (total_rooms, dirty_rooms, in_progress_rooms, clean_rooms) =
            tally(rooms.iter().map(|r| r.status.as_str()));
        let (total_areas, dirty_areas, in_progress_areas, clean_areas) =
            tally(areas.iter().map(|a| a.status.as_str()));

        Self {
            total_rooms,
            dirty_rooms,
            in_progress_rooms,
            clean_rooms,
            total_areas,
            dirty_areas,
            in_progress_areas,
            clean_areas,
        }
    }
}

/// Everything the front end needs to render the board.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Snapshot {
    pub staff: Vec<Staff>,
    pub areas: Vec<Area>,
    pub rooms: Vec<Room>,
    pub counts: Counts,
}

impl Snapshot {
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn area(&self, id: usize) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }
}
