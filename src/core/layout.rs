//! Fixed column layouts of the three housekeeping tables (1-based).
//!
//! Rooms and areas keep their status block at different offsets, so the
//! two mappers stay separate and only share [`StatusColumns`].

/// Row 1 holds the headers.
pub const FIRST_DATA_ROW: usize = 2;

pub mod rooms {
    pub const NUMBER: usize = 1;
    pub const STATUS: usize = 2;
    pub const ASSIGNED_TO: usize = 3;
    pub const TIME_IN: usize = 4;
    pub const TIME_OUT: usize = 5;
}

pub mod areas {
    pub const NAME: usize = 1;
    pub const LOCATION: usize = 2;
    pub const STATUS: usize = 3;
    pub const ASSIGNED_TO: usize = 4;
    pub const TIME_IN: usize = 5;
    pub const TIME_OUT: usize = 6;
    /// First column past the layout; legacy rows spilled time out here.
    pub const SPILL: usize = 7;
}

pub mod staff {
    pub const NAME: usize = 1;
    pub const ROLE: usize = 2;
}

/// Columns touched by updates and by the daily reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColumns {
    pub status: usize,
    pub assigned_to: usize,
    pub time_in: usize,
    pub time_out: usize,
}

pub const ROOM_COLUMNS: StatusColumns = StatusColumns {
    status: rooms::STATUS,
    assigned_to: rooms::ASSIGNED_TO,
    time_in: rooms::TIME_IN,
    time_out: rooms::TIME_OUT,
};

pub const AREA_COLUMNS: StatusColumns = StatusColumns {
    status: areas::STATUS,
    assigned_to: areas::ASSIGNED_TO,
    time_in: areas::TIME_IN,
    time_out: areas::TIME_OUT,
};

/// Names of the backing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub rooms: String,
    pub areas: String,
    pub staff: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            rooms: "Rooms".to_string(),
            areas: "Area".to_string(),
            staff: "Staff".to_string(),
        }
    }
}
