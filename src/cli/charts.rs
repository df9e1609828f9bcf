/// ASCII chart visualization for terminal output
/// Renders the probability and impact bar charts of a report
use crate::core::store::ChartSeries;
use colored::*;

/// ASCII bar chart for terminal display
pub struct AsciiBarChart {
    title: String,
    data: Vec<(String, f64)>,
    width: usize,
    precision: usize,
    scale_max: Option<f64>,
}

impl AsciiBarChart {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            data: Vec::new(),
            width: 40,
            precision: 2,
            scale_max: None,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Decimal places shown after each bar
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Scale bars against a fixed maximum instead of the largest value
    pub fn with_scale_max(mut self, max: f64) -> Self {
        self.scale_max = Some(max);
        self
    }

    pub fn add_bar(&mut self, label: &str, value: f64) {
        self.data.push((label.to_string(), value));
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.title.bold().cyan()));
        output.push_str(&"─".repeat(self.width + 20));
        output.push('\n');

        if self.data.is_empty() {
            output.push_str("(no data)\n");
            return output;
        }

        let max_value = self.scale_max.unwrap_or_else(|| {
            self.data.iter().map(|(_, v)| *v).fold(0.0, f64::max)
        });

        let max_label_len = self
            .data
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(10);

        for (label, value) in &self.data {
            let bar_width = if max_value > 0.0 {
                (((value / max_value) * self.width as f64) as usize).min(self.width)
            } else {
                0
            };

            let bar = "█".repeat(bar_width);
            let padding = " ".repeat(self.width - bar_width);
            let formatted_label = format!("{:width$}", label, width = max_label_len);

            output.push_str(&format!(
                "{} │{}{} {:.prec$}\n",
                formatted_label.yellow(),
                bar.green(),
                padding,
                value,
                prec = self.precision
            ));
        }

        output
    }
}

/// Probability and impact charts, side by side in the original tool, stacked here
pub fn create_risk_charts(series: &ChartSeries, width: usize) -> String {
    let mut probability = AsciiBarChart::new("== Risk Probabilities ==")
        .with_width(width)
        .with_precision(2)
        .with_scale_max(1.0);
    let mut impact = AsciiBarChart::new("== Risk Impacts ==")
        .with_width(width)
        .with_precision(0)
        .with_scale_max(10.0);

    for ((name, p), i) in series
        .names
        .iter()
        .zip(&series.probabilities)
        .zip(&series.impacts)
    {
        probability.add_bar(name, *p);
        impact.add_bar(name, *i);
    }

    format!("{}{}", probability.render(), impact.render())
}
