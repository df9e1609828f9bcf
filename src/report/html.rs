use crate::core::model::Report;
use std::fmt::Write;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            margin: 20px;
        }
        h1 {
            color: #333;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f4f4f4;
        }
"#;

/// Render a report as a self-contained HTML document.
/// All user-supplied text is escaped.
pub fn render(report: &Report) -> String {
    let mut html = String::new();
    let title = html_escape(&report.name);

    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Report: {title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <h1>Report: {title}</h1>
    <p><strong>Created At:</strong> {created}</p>

    <h2>Risks</h2>
    <table>
        <thead>
            <tr>
                <th>#</th>
                <th>Name</th>
                <th>Probability</th>
                <th>Impact</th>
            </tr>
        </thead>
        <tbody>
"#,
        created = report.created_at_display(),
    );

    for (idx, risk) in report.risks.iter().enumerate() {
        let _ = write!(
            html,
            r#"            <tr>
                <td>{}</td>
                <td>{}</td>
                <td>{:?}</td>
                <td>{}</td>
            </tr>
"#,
            idx + 1,
            html_escape(&risk.name),
            risk.probability,
            risk.impact
        );
    }

    html.push_str(
        r#"        </tbody>
    </table>

    <h2>Comments</h2>
    <ul>
"#,
    );

    for comment in &report.comments {
        let _ = writeln!(
            html,
            "        <li>{} (Added At: {})</li>",
            html_escape(&comment.text),
            comment.added_at.format(crate::core::model::TIMESTAMP_FORMAT)
        );
    }

    html.push_str(
        r#"    </ul>
</body>
</html>
"#,
    );

    html
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
