pub mod charts;
pub mod impact;
pub mod interactive;
pub mod render;

use crate::core::store::ReportStore;
use crate::storage;
use anyhow::Context;
use std::path::Path;

/// Load a saved JSON report into a fresh store. The report is named after
/// `name`, or the file stem when no name is given.
pub fn load_saved_report(path: &Path, name: Option<&str>) -> anyhow::Result<(ReportStore, String)> {
    let name = match name {
        Some(n) => n.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .with_context(|| format!("cannot derive a report name from {}", path.display()))?,
    };

    let record = storage::load_json(path)?;
    let mut store = ReportStore::new();
    store.insert_record(&name, record)?;
    tracing::debug!(report = %name, path = %path.display(), "loaded saved report");

    Ok((store, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_name_defaults_to_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Q1.json");
        std::fs::write(&path, r#"{"created_at": "2024-01-01 00:00:00"}"#).unwrap();

        let (store, name) = load_saved_report(&path, None).unwrap();
        assert_eq!(name, "Q1");
        assert_eq!(store.list_reports(), vec!["Q1".to_string()]);

        let (_, name) = load_saved_report(&path, Some("Renamed")).unwrap();
        assert_eq!(name, "Renamed");
    }

    #[test]
    fn test_out_of_range_saved_risk_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"created_at": "2024-01-01 00:00:00",
                "risks": [{"name": "x", "probability": 3.0, "impact": 5, "added_at": "2024-01-01 00:00:00"}],
                "comments": []}"#,
        )
        .unwrap();

        let err = load_saved_report(&path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::RiskregError>(),
            Some(crate::RiskregError::InvalidInput(_))
        ));
    }
}
