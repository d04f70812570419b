use serde::Serialize;

pub const UNASSIGNED_LOCATION: &str = "Unassigned";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: usize,           // ⇔ physical row in the Area table
    pub name: String,        // ⇔ column A
    pub location: String,    // ⇔ column B ("Unassigned" when blank)
    pub status: String,      // ⇔ column C
    pub assigned_to: String, // ⇔ column D
    pub time_in: String,     // ⇔ column E
    pub time_out: String,    // ⇔ column F
}
