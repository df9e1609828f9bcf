use crate::cli::interactive::menu::MenuAction;
use crate::core::validation::{validate_impact, validate_probability, validate_report_name};
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn select_action(theme: &ColorfulTheme) -> anyhow::Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let idx = Select::with_theme(theme)
        .with_prompt("Risk Management System Menu")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[idx])
}

/// Pick one of the existing reports, pre-selecting the last one used
pub fn choose_report(
    theme: &ColorfulTheme,
    names: &[String],
    selected: Option<&str>,
) -> anyhow::Result<String> {
    let default = selected
        .and_then(|s| names.iter().position(|n| n == s))
        .unwrap_or(0);

    let idx = Select::with_theme(theme)
        .with_prompt("Select a report")
        .items(names)
        .default(default)
        .interact()?;

    Ok(names[idx].clone())
}

pub fn report_name(theme: &ColorfulTheme) -> anyhow::Result<String> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Enter report name")
        .validate_with(|input: &String| validate_report_name(input).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(name.trim().to_string())
}

pub struct RiskInput {
    pub name: String,
    pub probability: f64,
    pub impact: u8,
}

pub fn risk(theme: &ColorfulTheme) -> anyhow::Result<RiskInput> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Enter risk name")
        .interact_text()?;

    let probability: f64 = Input::with_theme(theme)
        .with_prompt("Enter risk probability (0-1)")
        .validate_with(|input: &f64| validate_probability(*input).map_err(|e| e.to_string()))
        .interact_text()?;

    let impact: u8 = Input::with_theme(theme)
        .with_prompt("Enter risk impact (1-10)")
        .validate_with(|input: &u8| validate_impact(*input).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(RiskInput {
        name,
        probability,
        impact,
    })
}

pub fn comment(theme: &ColorfulTheme) -> anyhow::Result<String> {
    let text: String = Input::with_theme(theme)
        .with_prompt("Enter your comment")
        .interact_text()?;
    Ok(text)
}

pub fn loss_per_unit(theme: &ColorfulTheme, default: f64) -> anyhow::Result<f64> {
    let loss: f64 = Input::with_theme(theme)
        .with_prompt("Enter financial loss per unit")
        .default(default)
        .validate_with(|input: &f64| {
            if input.is_finite() {
                Ok(())
            } else {
                Err("Value must be a finite number")
            }
        })
        .interact_text()?;
    Ok(loss)
}
