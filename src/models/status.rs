use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    Dirty,
    InProgress,
    Clean,
}

impl Status {
    /// Exact string stored in the status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Dirty => "Dirty",
            Status::InProgress => "In Progress",
            Status::Clean => "Clean",
        }
    }

    /// Exact, case-sensitive match against the stored string.
    pub fn from_cell(s: &str) -> Option<Self> {
        match s {
            "Dirty" => Some(Status::Dirty),
            "In Progress" => Some(Status::InProgress),
            "Clean" => Some(Status::Clean),
            _ => None,
        }
    }

    /// Lenient parsing for CLI input (`dirty`, `in-progress`, `clean`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let norm: String = code
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match norm.as_str() {
            "dirty" | "d" => Some(Status::Dirty),
            "inprogress" | "progress" | "p" => Some(Status::InProgress),
            "clean" | "c" => Some(Status::Clean),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
