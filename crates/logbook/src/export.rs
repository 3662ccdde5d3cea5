//! Export file writing and import parsing.
//!
//! An export is one self-contained JSON document: an array of wire-form
//! records, keys sorted, pretty-printed, UTF-8. Files are named
//! `logs-<Y-MM-dd-HH-mm-ss>.json` after the export timestamp.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{LogError, Result};
use crate::types::LogRecord;

/// Returns the export file name for the given timestamp.
#[must_use]
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("logs-{}.json", at.format("%Y-%m-%d-%H-%M-%S"))
}

/// Serializes records into an export document.
///
/// The document routes through [`serde_json::Value`], whose object map
/// sorts keys, so the output is deterministic for a given sequence.
///
/// # Errors
///
/// Returns [`LogError::Encode`] if serialization fails.
pub fn to_export_document(records: &[LogRecord]) -> Result<Vec<u8>> {
    let value = serde_json::to_value(records).map_err(LogError::Encode)?;
    serde_json::to_vec_pretty(&value).map_err(LogError::Encode)
}

/// Writes records to `path` as an export document.
///
/// The document is staged in a sibling file and moved into place only
/// once fully written; a failure never leaves a partial file at `path`.
///
/// # Errors
///
/// Returns [`LogError::Encode`] on serialization failure or
/// [`LogError::Io`] on write failure.
pub fn write_export(path: &Path, records: &[LogRecord]) -> Result<()> {
    let document = to_export_document(records)?;

    let staged = path.with_extension("json.part");
    fs::write(&staged, &document)?;
    if let Err(err) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(err.into());
    }
    Ok(())
}

/// Parses an export file back into records.
///
/// # Errors
///
/// Returns [`LogError::Io`] if the file cannot be read, distinct from
/// [`LogError::MalformedExport`] when its contents are not a valid record
/// sequence.
pub fn read_export(path: &Path) -> Result<Vec<LogRecord>> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(LogError::MalformedExport)
}
