use crate::core::paths::{backup_file_name, json_file_name};
use crate::storage::writer::check_file_safe_name;
use crate::{Result, RiskregError};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy `<source_dir>/<report>.json` to `<backup_dir>/<report>_backup.json`.
///
/// The JSON file must have been saved beforehand; a missing source is a
/// `Storage` error and nothing is created.
pub fn create_backup<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    backup_dir: Q,
    report_name: &str,
) -> Result<PathBuf> {
    check_file_safe_name(report_name)?;

    let source = source_dir.as_ref().join(json_file_name(report_name));
    if !source.is_file() {
        return Err(RiskregError::Storage(format!(
            "Original report file '{}' not found. Save the report first.",
            source.display()
        )));
    }

    fs::create_dir_all(backup_dir.as_ref())?;
    let target = backup_dir.as_ref().join(backup_file_name(report_name));
    let bytes = fs::copy(&source, &target)?;

    tracing::info!(
        report = report_name,
        source = %source.display(),
        target = %target.display(),
        bytes,
        "created backup"
    );
    Ok(target)
}
