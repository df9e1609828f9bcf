/// File writer for rendered and serialized reports
use crate::core::paths::{html_file_name, json_file_name};
use crate::report::json::{self, ReportRecord};
use crate::{Result, RiskregError};
use std::fs;
use std::path::{Path, PathBuf};

/// Report names become file names, so they must not escape the target directory.
pub fn check_file_safe_name(report_name: &str) -> Result<()> {
    if report_name.is_empty()
        || report_name == "."
        || report_name == ".."
        || report_name.contains(['/', '\\'])
    {
        return Err(RiskregError::InvalidInput(format!(
            "report name '{}' cannot be used as a file name",
            report_name
        )));
    }
    Ok(())
}

pub fn save_html<P: AsRef<Path>>(dir: P, report_name: &str, html: &str) -> Result<PathBuf> {
    check_file_safe_name(report_name)?;
    let path = dir.as_ref().join(html_file_name(report_name));
    write_file(&path, html)?;
    tracing::info!(report = report_name, path = %path.display(), "saved HTML report");
    Ok(path)
}

pub fn save_json<P: AsRef<Path>>(
    dir: P,
    report_name: &str,
    record: &ReportRecord,
) -> Result<PathBuf> {
    check_file_safe_name(report_name)?;
    let path = dir.as_ref().join(json_file_name(report_name));
    write_file(&path, &json::encode(record)?)?;
    tracing::info!(report = report_name, path = %path.display(), "saved JSON report");
    Ok(path)
}

pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ReportRecord> {
    let raw = fs::read_to_string(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), bytes = raw.len(), "loaded JSON report");
    json::decode(&raw)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
