use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `snapshot` to `file` (absolute path) in the given format.
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::InvalidArgument(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if snapshot.rooms.is_empty() && snapshot.areas.is_empty() {
            warning("No rooms or areas to export.");
        }

        match format {
            ExportFormat::Csv => export_csv(snapshot, path),
            ExportFormat::Json => export_json(snapshot, path),
            ExportFormat::Xlsx => export_xlsx(snapshot, path),
        }
    }
}
