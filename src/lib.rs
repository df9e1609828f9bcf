pub mod cli;
pub mod core;
pub mod report;
pub mod storage;

pub use crate::core::{
    model::{Comment, Report, Risk},
    store::{ChartSeries, FinancialImpact, ReportStore, RiskImpact},
};
pub use crate::report::json::ReportRecord;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskregError {
    #[error("Report already exists: {0}")]
    Conflict(String),

    #[error("Report does not exist: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RiskregError {
    /// True for failures caused by the data handed to the store rather than
    /// by the filesystem.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            RiskregError::Conflict(_) | RiskregError::NotFound(_) | RiskregError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for RiskregError {
    fn from(err: serde_json::Error) -> Self {
        RiskregError::Serialization(err.to_string())
    }
}

impl From<zip::result::ZipError> for RiskregError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => RiskregError::Io(e),
            other => RiskregError::Archive(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskregError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = RiskregError::Conflict("Q1".to_string());
        assert_eq!(err.to_string(), "Report already exists: Q1");

        let err = RiskregError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_data_errors_are_distinguished_from_io() {
        assert!(RiskregError::NotFound("x".into()).is_data_error());
        assert!(RiskregError::InvalidInput("x".into()).is_data_error());
        assert!(!RiskregError::Storage("x".into()).is_data_error());
        assert!(!RiskregError::Io(io::Error::other("x")).is_data_error());
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: RiskregError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, RiskregError::Serialization(_)));
    }
}
