#![allow(dead_code)]

//! Shared setup for riskreg integration tests
use anyhow::Result;
use assert_cmd::Command;
use chrono::{NaiveDate, NaiveDateTime};
use riskreg::core::clock::ManualClock;
use riskreg::ReportStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated RISKREG_HOME and output directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub home: PathBuf,
    pub output: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let home = temp_dir.path().join("home");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(&home)?;
        fs::create_dir_all(&output)?;
        Ok(Self {
            temp_dir,
            home,
            output,
        })
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn command(&self) -> Command {
        let mut cmd = riskreg_cmd();
        cmd.env("RISKREG_HOME", &self.home)
            .env_remove("RISKREG_CONFIG")
            .env_remove("RISKREG_LOG");
        cmd
    }
}

pub fn riskreg_cmd() -> Command {
    Command::cargo_bin("riskreg").expect("riskreg binary is built for integration tests")
}

pub fn fixed_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Store whose clock starts at `fixed_start` and advances one second per stamp
pub fn stepping_store() -> ReportStore<ManualClock> {
    ReportStore::with_clock(ManualClock::new(fixed_start()).with_step(1))
}

/// The "Q1" report used across the scenarios
pub fn q1_store() -> ReportStore<ManualClock> {
    let mut store = stepping_store();
    store.create("Q1").unwrap();
    store.add_risk("Q1", "Server Outage", 0.2, 8).unwrap();
    store.add_risk("Q1", "Data Breach", 0.05, 10).unwrap();
    store.add_comment("Q1", "Review after migration").unwrap();
    store
}

pub const Q1_JSON: &str = r#"{
    "created_at": "2024-01-15 09:00:00",
    "risks": [
        {
            "name": "Server Outage",
            "probability": 0.2,
            "impact": 8,
            "added_at": "2024-01-15 09:00:01"
        },
        {
            "name": "Data Breach",
            "probability": 0.05,
            "impact": 10,
            "added_at": "2024-01-15 09:00:02"
        }
    ],
    "comments": [
        {
            "comment": "Review after migration",
            "added_at": "2024-01-15 09:00:03"
        }
    ]
}"#;

pub fn list_dir(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
