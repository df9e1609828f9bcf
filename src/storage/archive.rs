/// Zip archives holding a JSON snapshot of every report
use crate::core::paths::{archive_file_name, json_file_name};
use crate::report::json::{self, ReportRecord};
use crate::{Result, RiskregError};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;

#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub entries: Vec<String>,
}

/// Flat entry name for a report. Path separators become `_`, dot-only names
/// are replaced, and a numeric suffix keeps entries unique.
fn entry_name(report_name: &str, taken: &HashSet<String>) -> String {
    let mut stem = report_name.replace(['/', '\\'], "_");
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        stem = "_".repeat(stem.len().max(1));
    }

    let mut entry = json_file_name(&stem);
    let mut n = 2;
    while taken.contains(&entry) {
        entry = json_file_name(&format!("{}_{}", stem, n));
        n += 1;
    }
    entry
}

/// Write `reports_archive_<timestamp>.zip` into `dir` with one `<name>.json`
/// entry per record, in the given order. Entries are streamed straight into
/// the archive, so no per-report file is left behind.
pub fn archive_records<P: AsRef<Path>>(
    dir: P,
    records: &[(String, ReportRecord)],
    at: NaiveDateTime,
) -> Result<ArchiveSummary> {
    fs::create_dir_all(dir.as_ref())?;
    let path = dir.as_ref().join(archive_file_name(at));
    let file = File::create(&path)?;

    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries = Vec::with_capacity(records.len());
    let mut taken = HashSet::with_capacity(records.len());
    for (name, record) in records {
        let entry = entry_name(name, &taken);
        if entry != json_file_name(name) {
            tracing::warn!(report = %name, entry = %entry, "renamed archive entry");
        }
        zip.start_file(entry.as_str(), options)?;
        zip.write_all(json::encode(record)?.as_bytes())?;
        tracing::debug!(entry = %entry, risks = record.risks.len(), "archived report");
        taken.insert(entry.clone());
        entries.push(entry);
    }
    zip.finish()?;

    tracing::info!(path = %path.display(), reports = entries.len(), "wrote archive");
    Ok(ArchiveSummary { path, entries })
}

/// Decode every `.json` entry of an archive, keyed by report name
pub fn read_archive<P: AsRef<Path>>(path: P) -> Result<Vec<(String, ReportRecord)>> {
    let file = File::open(path.as_ref())?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut records = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = match entry.name().strip_suffix(".json") {
            Some(stem) => stem.to_string(),
            None => {
                return Err(RiskregError::Archive(format!(
                    "unexpected entry '{}'",
                    entry.name()
                )))
            }
        };
        let mut raw = String::new();
        entry.read_to_string(&mut raw)?;
        records.push((name, json::decode(&raw)?));
    }
    Ok(records)
}
