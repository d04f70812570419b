pub mod backup;
pub mod config;
pub mod import;
pub mod layout;
pub mod log;
pub mod mapper;
pub mod repair;
pub mod reset;
pub mod service;
pub mod snapshot;
pub mod update;

pub use service::Housekeeping;

/// One line for the internal `log` table, collected by the facade and
/// flushed by the caller that owns the database connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl AuditEntry {
    pub fn new<M: Into<String>>(operation: &str, target: &str, message: M) -> Self {
        Self {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        }
    }
}
