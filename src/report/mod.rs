use crate::core::model::Report;
use crate::Result;

pub mod html;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Html,
    Json,
}

pub struct ReportGenerator {
    format: Format,
}

impl ReportGenerator {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn generate(&self, report: &Report) -> Result<String> {
        match self.format {
            Format::Text => Ok(text::render(report)),
            Format::Html => Ok(html::render(report)),
            Format::Json => json::encode(&json::ReportRecord::from(report)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report() -> Report {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        Report::new("Ops", at)
    }

    #[test]
    fn test_generate_dispatches_on_format() {
        let report = report();
        let html = ReportGenerator::new(Format::Html).generate(&report).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let text = ReportGenerator::new(Format::Text).generate(&report).unwrap();
        assert!(text.starts_with("--- Report: Ops ---"));

        let encoded = ReportGenerator::new(Format::Json).generate(&report).unwrap();
        assert_eq!(json::decode(&encoded).unwrap(), json::ReportRecord::from(&report));
    }
}
