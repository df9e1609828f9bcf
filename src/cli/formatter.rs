/// Table formatting for financial impact
use crate::cli::interactive::create_styled_table;
use crate::core::store::FinancialImpact;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Two-decimal monetary amount with an optional currency prefix
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold).fg(Color::Green))
        .collect()
}

pub fn impact_table(impact: &FinancialImpact, currency: &str) -> Table {
    let mut table = create_styled_table();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Risk", "Financial Impact"]));

    for risk in &impact.per_risk {
        table.add_row(vec![
            Cell::new(&risk.name),
            Cell::new(format_amount(risk.amount, currency)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format_amount(impact.total, currency))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);

    table
}
