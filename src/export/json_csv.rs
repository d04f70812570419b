use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

use super::model::flatten;

/// Whole snapshot (staff, areas, rooms, counts), pretty-printed.
pub(crate) fn export_json(snapshot: &Snapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(snapshot)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Rooms and areas as flat rows (header included thanks to serde).
pub(crate) fn export_csv(snapshot: &Snapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in flatten(snapshot) {
        wtr.serialize(&item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
