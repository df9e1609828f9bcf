use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the home directory to avoid repeated environment lookups
static RISKREG_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the riskreg home directory
/// Checks RISKREG_HOME environment variable, falls back to ${HOME}/.riskreg
pub fn riskreg_home() -> PathBuf {
    RISKREG_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("RISKREG_HOME") {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".riskreg")
            }
        })
        .clone()
}

/// Default configuration file location
pub fn default_config_path() -> PathBuf {
    riskreg_home().join("config.toml")
}

pub fn html_file_name(report_name: &str) -> String {
    format!("{}.html", report_name)
}

pub fn json_file_name(report_name: &str) -> String {
    format!("{}.json", report_name)
}

pub fn backup_file_name(report_name: &str) -> String {
    format!("{}_backup.json", report_name)
}

/// `reports_archive_<YYYYMMDDHHMMSS>.zip`
pub fn archive_file_name(at: chrono::NaiveDateTime) -> String {
    format!("reports_archive_{}.zip", at.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_file_names() {
        assert_eq!(html_file_name("Q1"), "Q1.html");
        assert_eq!(json_file_name("Q1"), "Q1.json");
        assert_eq!(backup_file_name("Q1"), "Q1_backup.json");
    }

    #[test]
    fn test_archive_file_name() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 5, 7)
            .unwrap();
        assert_eq!(archive_file_name(at), "reports_archive_20241231230507.zip");
    }

    #[test]
    fn test_config_path_under_home() {
        assert!(default_config_path().ends_with("config.toml"));
        assert!(default_config_path().starts_with(riskreg_home()));
    }
}
