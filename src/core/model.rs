/// Report data model: reports, risk entries and comments
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wall-clock format used for every stored timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub risks: Vec<Risk>,
    pub comments: Vec<Comment>,
}

impl Report {
    pub fn new(name: &str, created_at: NaiveDateTime) -> Self {
        Self {
            name: name.to_string(),
            created_at,
            risks: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub name: String,
    pub probability: f64,
    pub impact: u8,
    #[serde(with = "timestamp")]
    pub added_at: NaiveDateTime,
}

impl Risk {
    /// Expected loss weight before scaling by a monetary unit
    pub fn score(&self) -> f64 {
        self.probability * f64::from(self.impact)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    // Saved files use the key "comment"
    #[serde(rename = "comment", alias = "text")]
    pub text: String,
    #[serde(with = "timestamp")]
    pub added_at: NaiveDateTime,
}

/// Serde helpers for second-precision timestamps
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_risk_score() {
        let risk = Risk {
            name: "Server Outage".to_string(),
            probability: 0.5,
            impact: 8,
            added_at: at(9, 0, 0),
        };
        assert_eq!(risk.score(), 4.0);
    }

    #[test]
    fn test_comment_uses_comment_key() {
        let comment = Comment {
            text: "Reviewed".to_string(),
            added_at: at(10, 15, 30),
        };
        let json = serde_json::to_string(&comment).unwrap();
        assert_eq!(json, r#"{"comment":"Reviewed","added_at":"2024-03-01 10:15:30"}"#);
    }

    #[test]
    fn test_comment_accepts_text_key() {
        let comment: Comment =
            serde_json::from_str(r#"{"text":"hi","added_at":"2024-03-01 10:15:30"}"#).unwrap();
        assert_eq!(comment.text, "hi");
        assert_eq!(comment.added_at, at(10, 15, 30));
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let result: Result<Comment, _> =
            serde_json::from_str(r#"{"comment":"x","added_at":"yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_created_at_display() {
        let report = Report::new("Q1", at(8, 5, 9));
        assert_eq!(report.created_at_display(), "2024-03-01 08:05:09");
        assert!(report.risks.is_empty());
        assert!(report.comments.is_empty());
    }
}
