use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::session::SessionData;
use crate::error::{AppError, Result};

pub const TOOL_NAME: &str = "pageprobe";

/// `pageprobe-export-<unix millis>.json`
pub fn export_file_name(timestamp_millis: i64) -> String {
    format!("{}-export-{}.json", TOOL_NAME, timestamp_millis)
}

/// Pretty UTF-8 JSON of the session state.
pub fn to_json(session: &SessionData) -> Result<String> {
    serde_json::to_string_pretty(session).map_err(|e| AppError::Export(e.to_string()))
}

/// Write the session state into `dir`.
///
/// An empty session is not an error: nothing is written and `None` returned.
pub fn export_json(session: &SessionData, dir: &Path) -> Result<Option<PathBuf>> {
    if session.is_empty() {
        warn!("No data to export. Run an extraction first!");
        return Ok(None);
    }

    info!("Exporting data to JSON...");
    let json = to_json(session)?;
    let path = dir.join(export_file_name(Utc::now().timestamp_millis()));
    std::fs::write(&path, json).map_err(|e| AppError::io(&path, e))?;

    info!("Data exported to {}", path.display());
    Ok(Some(path))
}
