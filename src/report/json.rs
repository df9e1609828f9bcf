use crate::core::model::{timestamp, Comment, Report, Risk};
use crate::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage form of a report. The report name is carried by the file name,
/// not by the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl From<&Report> for ReportRecord {
    fn from(report: &Report) -> Self {
        Self {
            created_at: report.created_at,
            risks: report.risks.clone(),
            comments: report.comments.clone(),
        }
    }
}

impl ReportRecord {
    pub fn into_report(self, name: &str) -> Report {
        Report {
            name: name.to_string(),
            created_at: self.created_at,
            risks: self.risks,
            comments: self.comments,
        }
    }
}

/// Pretty JSON with four-space indentation
pub fn encode(record: &ReportRecord) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| crate::RiskregError::Serialization(e.to_string()))
}

pub fn decode(raw: &str) -> Result<ReportRecord> {
    Ok(serde_json::from_str(raw)?)
}
