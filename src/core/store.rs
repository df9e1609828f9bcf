/// In-memory report store.
///
/// Holds every report of a session keyed by name, in creation order. All
/// operations name their report explicitly; the store has no notion of a
/// "current" report. Nothing here performs I/O or prints.
use crate::core::clock::{Clock, SystemClock};
use crate::core::model::{Comment, Report, Risk};
use crate::core::validation::{validate_impact, validate_probability, validate_report_name};
use crate::report::{html, json::ReportRecord};
use crate::{Result, RiskregError};
use indexmap::IndexMap;
use serde::Serialize;

/// Financial impact of a single risk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskImpact {
    pub name: String,
    pub amount: f64,
}

/// Financial impact of a whole report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialImpact {
    pub per_risk: Vec<RiskImpact>,
    pub total: f64,
}

/// Parallel sequences handed to the chart renderer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub names: Vec<String>,
    pub probabilities: Vec<f64>,
    pub impacts: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug)]
pub struct ReportStore<C: Clock = SystemClock> {
    reports: IndexMap<String, Report>,
    clock: C,
}

impl ReportStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ReportStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReportStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            reports: IndexMap::new(),
            clock,
        }
    }

    /// Clock used to stamp reports, risks and comments
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Create an empty report. An existing report of the same name is left untouched.
    pub fn create(&mut self, name: &str) -> Result<()> {
        validate_report_name(name)?;
        if self.reports.contains_key(name) {
            return Err(RiskregError::Conflict(name.to_string()));
        }
        let report = Report::new(name, self.clock.now());
        self.reports.insert(name.to_string(), report);
        Ok(())
    }

    pub fn add_risk(
        &mut self,
        report_name: &str,
        name: &str,
        probability: f64,
        impact: u8,
    ) -> Result<()> {
        // Existence is checked first so an unknown report is always NotFound
        self.get(report_name)?;
        validate_probability(probability)?;
        validate_impact(impact)?;

        let added_at = self.clock.now();
        self.get_mut(report_name)?.risks.push(Risk {
            name: name.to_string(),
            probability,
            impact,
            added_at,
        });
        Ok(())
    }

    pub fn add_comment(&mut self, report_name: &str, text: &str) -> Result<()> {
        self.get(report_name)?;
        let added_at = self.clock.now();
        self.get_mut(report_name)?.comments.push(Comment {
            text: text.to_string(),
            added_at,
        });
        Ok(())
    }

    /// `probability * impact * loss_per_unit` for every risk, summed in insertion order.
    pub fn compute_financial_impact(
        &self,
        report_name: &str,
        loss_per_unit: f64,
    ) -> Result<FinancialImpact> {
        let report = self.get(report_name)?;

        let mut total = 0.0;
        let mut per_risk = Vec::with_capacity(report.risks.len());
        for risk in &report.risks {
            let amount = risk.probability * f64::from(risk.impact) * loss_per_unit;
            total += amount;
            per_risk.push(RiskImpact {
                name: risk.name.clone(),
                amount,
            });
        }

        Ok(FinancialImpact { per_risk, total })
    }

    pub fn render_html(&self, report_name: &str) -> Result<String> {
        Ok(html::render(self.get(report_name)?))
    }

    pub fn to_serializable(&self, report_name: &str) -> Result<ReportRecord> {
        Ok(ReportRecord::from(self.get(report_name)?))
    }

    /// Report names in creation order
    pub fn list_reports(&self) -> Vec<String> {
        self.reports.keys().cloned().collect()
    }

    pub fn view(&self, report_name: &str) -> Result<Report> {
        self.get(report_name).cloned()
    }

    pub fn chart_series(&self, report_name: &str) -> Result<ChartSeries> {
        let report = self.get(report_name)?;
        Ok(ChartSeries {
            names: report.risks.iter().map(|r| r.name.clone()).collect(),
            probabilities: report.risks.iter().map(|r| r.probability).collect(),
            impacts: report.risks.iter().map(|r| f64::from(r.impact)).collect(),
        })
    }

    /// Load a previously serialized report under `name`.
    pub fn insert_record(&mut self, name: &str, record: ReportRecord) -> Result<()> {
        validate_report_name(name)?;
        if self.reports.contains_key(name) {
            return Err(RiskregError::Conflict(name.to_string()));
        }
        for risk in &record.risks {
            validate_probability(risk.probability)?;
            validate_impact(risk.impact)?;
        }
        self.reports
            .insert(name.to_string(), record.into_report(name));
        Ok(())
    }

    /// Serializable snapshot of every report, in creation order
    pub fn records(&self) -> Vec<(String, ReportRecord)> {
        self.reports
            .iter()
            .map(|(name, report)| (name.clone(), ReportRecord::from(report)))
            .collect()
    }

    pub fn contains(&self, report_name: &str) -> bool {
        self.reports.contains_key(report_name)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    fn get(&self, report_name: &str) -> Result<&Report> {
        self.reports
            .get(report_name)
            .ok_or_else(|| RiskregError::NotFound(report_name.to_string()))
    }

    fn get_mut(&mut self, report_name: &str) -> Result<&mut Report> {
        self.reports
            .get_mut(report_name)
            .ok_or_else(|| RiskregError::NotFound(report_name.to_string()))
    }
}
