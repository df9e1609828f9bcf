/// Menu-driven session over an in-memory report store.
///
/// `Session` owns the store plus the "last used report" shown as the default
/// selection; the prompt loop in `run_menu` only gathers input and prints.
use crate::cli::charts::create_risk_charts;
use crate::cli::formatter::{impact_table, format_amount};
use crate::cli::interactive::{print_header, prompts, show_error, show_info, show_success, show_warning};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::Config;
use crate::core::store::{FinancialImpact, ReportStore};
use crate::report::text;
use crate::storage::{self, ArchiveSummary};
use crate::{Result, RiskregError};
use dialoguer::theme::ColorfulTheme;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateReport,
    AddRisk,
    AddComment,
    Charts,
    FinancialImpact,
    ViewReport,
    SaveReport,
    Backup,
    Archive,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 10] = [
        MenuAction::CreateReport,
        MenuAction::AddRisk,
        MenuAction::AddComment,
        MenuAction::Charts,
        MenuAction::FinancialImpact,
        MenuAction::ViewReport,
        MenuAction::SaveReport,
        MenuAction::Backup,
        MenuAction::Archive,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::CreateReport => "Create New Report",
            MenuAction::AddRisk => "Add Risk Data",
            MenuAction::AddComment => "Add Comment",
            MenuAction::Charts => "Create Charts",
            MenuAction::FinancialImpact => "Calculate Financial Impact",
            MenuAction::ViewReport => "View Report",
            MenuAction::SaveReport => "Save Report",
            MenuAction::Backup => "Create Backup",
            MenuAction::Archive => "Archive Versions",
            MenuAction::Exit => "Exit",
        }
    }

    /// Whether the action operates on one existing report
    pub fn needs_report(&self) -> bool {
        !matches!(
            self,
            MenuAction::CreateReport | MenuAction::Archive | MenuAction::Exit
        )
    }
}

#[derive(Debug, Clone)]
pub struct SavedFiles {
    pub html: PathBuf,
    pub json: PathBuf,
}

pub struct Session<C: Clock = SystemClock> {
    store: ReportStore<C>,
    config: Config,
    selected: Option<String>,
}

impl<C: Clock> Session<C> {
    pub fn new(store: ReportStore<C>, config: Config) -> Self {
        Self {
            store,
            config,
            selected: None,
        }
    }

    pub fn store(&self) -> &ReportStore<C> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn create_report(&mut self, name: &str) -> Result<()> {
        self.store.create(name)?;
        self.selected = Some(name.to_string());
        Ok(())
    }

    pub fn add_risk(&mut self, report: &str, name: &str, probability: f64, impact: u8) -> Result<()> {
        self.store.add_risk(report, name, probability, impact)?;
        self.selected = Some(report.to_string());
        Ok(())
    }

    pub fn add_comment(&mut self, report: &str, text: &str) -> Result<()> {
        self.store.add_comment(report, text)?;
        self.selected = Some(report.to_string());
        Ok(())
    }

    /// `None` when the report has no risks to chart
    pub fn charts(&self, report: &str) -> Result<Option<String>> {
        let series = self.store.chart_series(report)?;
        if series.is_empty() {
            return Ok(None);
        }
        Ok(Some(create_risk_charts(&series, self.config.charts.width)))
    }

    pub fn financial_impact(&self, report: &str, loss_per_unit: f64) -> Result<FinancialImpact> {
        self.store.compute_financial_impact(report, loss_per_unit)
    }

    pub fn view(&self, report: &str) -> Result<String> {
        Ok(text::render(&self.store.view(report)?))
    }

    /// Write `<report>.html` and `<report>.json` into the output directory
    pub fn save(&self, report: &str) -> Result<SavedFiles> {
        let dir = &self.config.output.directory;
        let html = storage::save_html(dir, report, &self.store.render_html(report)?)?;
        let json = storage::save_json(dir, report, &self.store.to_serializable(report)?)?;
        Ok(SavedFiles { html, json })
    }

    pub fn backup(&self, report: &str) -> Result<PathBuf> {
        if !self.store.contains(report) {
            return Err(RiskregError::NotFound(report.to_string()));
        }
        storage::create_backup(
            &self.config.output.directory,
            self.config.output.backup_path(),
            report,
        )
    }

    pub fn archive(&self) -> Result<ArchiveSummary> {
        storage::archive_records(
            &self.config.output.directory,
            &self.store.records(),
            self.store.clock().now(),
        )
    }
}

pub fn run_menu(config: Config) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = Session::new(ReportStore::new(), config);

    print_header("Risk Management System");

    loop {
        let action = prompts::select_action(&theme)?;
        if action == MenuAction::Exit {
            show_info("Exiting Risk Management System. Goodbye!");
            return Ok(());
        }

        if let Err(err) = dispatch(&mut session, &theme, action) {
            // Report problems are shown and the menu continues; prompt failures end the session
            match err.downcast_ref::<RiskregError>() {
                Some(e) => {
                    tracing::debug!(action = ?action, error = %e, "menu action failed");
                    show_error(&e.to_string());
                }
                None => return Err(err),
            }
        }
    }
}

fn dispatch(
    session: &mut Session,
    theme: &ColorfulTheme,
    action: MenuAction,
) -> anyhow::Result<()> {
    if action == MenuAction::CreateReport {
        let name = prompts::report_name(theme)?;
        session.create_report(&name)?;
        show_success(&format!("New report '{}' created.", name));
        return Ok(());
    }

    if action == MenuAction::Archive {
        let summary = session.archive()?;
        show_success(&format!(
            "All reports archived to '{}' ({} reports).",
            summary.path.display(),
            summary.entries.len()
        ));
        return Ok(());
    }

    let names = session.store().list_reports();
    if action.needs_report() && names.is_empty() {
        show_warning("No reports available. Create a report first.");
        return Ok(());
    }
    let report = prompts::choose_report(theme, &names, session.selected())?;

    match action {
        MenuAction::AddRisk => {
            let input = prompts::risk(theme)?;
            session.add_risk(&report, &input.name, input.probability, input.impact)?;
            show_success(&format!(
                "Risk '{}' added to report '{}'.",
                input.name, report
            ));
        }
        MenuAction::AddComment => {
            let text = prompts::comment(theme)?;
            session.add_comment(&report, &text)?;
            show_success(&format!("Comment added to report '{}'.", report));
        }
        MenuAction::Charts => match session.charts(&report)? {
            Some(charts) => println!("{}", charts),
            None => show_warning("No data to create charts. Add risks first."),
        },
        MenuAction::FinancialImpact => {
            let loss = prompts::loss_per_unit(
                theme,
                session.config().finance.default_loss_per_unit,
            )?;
            let impact = session.financial_impact(&report, loss)?;
            let currency = &session.config().finance.currency_symbol;
            println!("{}", impact_table(&impact, currency));
            show_info(&format!(
                "Total Financial Impact: {}",
                format_amount(impact.total, currency)
            ));
        }
        MenuAction::ViewReport => {
            println!("\n{}", session.view(&report)?);
        }
        MenuAction::SaveReport => {
            let saved = session.save(&report)?;
            show_success(&format!(
                "Report '{}' saved as '{}' and '{}'.",
                report,
                saved.html.display(),
                saved.json.display()
            ));
        }
        MenuAction::Backup => {
            let target = session.backup(&report)?;
            show_success(&format!(
                "Backup for '{}' created at '{}'.",
                report,
                target.display()
            ));
        }
        MenuAction::CreateReport | MenuAction::Archive | MenuAction::Exit => {}
    }

    Ok(())
}
