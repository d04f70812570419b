pub mod area;
pub mod patch;
pub mod room;
pub mod snapshot;
pub mod staff;
pub mod status;
