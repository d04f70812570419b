use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: usize,           // ⇔ physical row in the Rooms table
    pub room_number: String, // ⇔ column A
    pub floor: String,       // ⇔ last floor header above this row
    pub status: String,      // ⇔ column B
    pub assigned_to: String, // ⇔ column C
    pub time_in: String,     // ⇔ column D
    pub time_out: String,    // ⇔ column E
}
