use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Mutation request for a single room or area row.
///
/// `assigned_to: Some("")` clears the assignment, `None` leaves it as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Patch {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub set_time_in: bool,
    pub set_time_out: bool,
    pub reset: bool,
}

impl Patch {
    pub fn for_row(id: usize) -> Self {
        Self {
            id: Some(id as i64),
            ..Self::default()
        }
    }

    pub fn status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn assign<S: Into<String>>(mut self, who: S) -> Self {
        self.assigned_to = Some(who.into());
        self
    }

    pub fn time_in(mut self) -> Self {
        self.set_time_in = true;
        self
    }

    pub fn time_out(mut self) -> Self {
        self.set_time_out = true;
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }

    /// Row 1 is the header, so valid data rows start at 2.
    pub fn row(&self) -> AppResult<usize> {
        match self.id {
            Some(id) if id > 1 => Ok(id as usize),
            Some(id) => Err(AppError::InvalidArgument(format!(
                "Invalid row id {id}: data rows start at 2"
            ))),
            None => Err(AppError::InvalidArgument("Missing row id".into())),
        }
    }

    /// Status to write: the given one, or `Dirty` when absent or blank.
    pub fn effective_status(&self) -> &str {
        match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => "Dirty",
        }
    }
}
