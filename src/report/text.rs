use crate::core::model::{Report, TIMESTAMP_FORMAT};
use std::fmt::Write;

/// Human-readable report view for the console
pub fn render(report: &Report) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(&mut output, "--- Report: {} ---", report.name);
    let _ = writeln!(&mut output, "Created At: {}", report.created_at_display());

    let _ = writeln!(&mut output, "Risks:");
    for (idx, risk) in report.risks.iter().enumerate() {
        let _ = writeln!(
            &mut output,
            "  {}. Name: {}, Probability: {:?}, Impact: {}",
            idx + 1,
            risk.name,
            risk.probability,
            risk.impact
        );
    }

    let _ = writeln!(&mut output, "Comments:");
    for (idx, comment) in report.comments.iter().enumerate() {
        let _ = writeln!(
            &mut output,
            "  {}. {} (Added At: {})",
            idx + 1,
            comment.text,
            comment.added_at.format(TIMESTAMP_FORMAT)
        );
    }

    let _ = writeln!(&mut output, "{}", "-".repeat(30));
    output
}
