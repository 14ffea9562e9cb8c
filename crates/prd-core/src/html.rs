//! Standalone HTML summary page: header badges, overview, objectives and
//! the functional requirements table.

use crate::document::Document;
use crate::markdown::present;
use chrono::NaiveDateTime;

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 2rem;
            border-radius: 10px;
            margin-bottom: 2rem;
            text-align: center;
        }
        .header h1 { margin: 0; font-size: 2.5rem; }
        .metadata { margin-top: 1rem; }
        .badge {
            display: inline-block;
            padding: 0.25rem 0.75rem;
            background: rgba(255,255,255,0.2);
            border-radius: 20px;
            font-size: 0.875rem;
            margin: 0 0.5rem;
            text-transform: uppercase;
        }
        .priority-critical { background: #e74c3c; }
        .priority-high { background: #e67e22; }
        .priority-medium { background: #f39c12; }
        .priority-low { background: #27ae60; }
        .doc-info {
            background: #f8f9fa;
            padding: 1.5rem;
            border-radius: 8px;
            margin-bottom: 2rem;
        }
        .info-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
        }
        .section { margin-bottom: 3rem; }
        .section h2 {
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 0.5rem;
        }
        .subsection { margin: 2rem 0; }
        .subsection h3 { color: #34495e; }
        table { width: 100%; border-collapse: collapse; margin: 1rem 0; }
        th, td { text-align: left; padding: 0.75rem; border-bottom: 1px solid #ddd; }
        th { background: #f4f4f4; font-weight: 600; }
        tr:hover { background: #f9f9f9; }
        ul, ol { padding-left: 2rem; }
        li { margin: 0.5rem 0; }
        footer {
            margin-top: 3rem;
            padding-top: 2rem;
            border-top: 1px solid #eee;
            text-align: center;
            color: #666;
            font-size: 0.9rem;
        }
"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Class-safe form of a priority word.
fn class_token(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn render(doc: &Document, generated_at: NaiveDateTime) -> String {
    let title = escape(&doc.title);
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{title} - PRD</title>\n"));
    out.push_str(&format!("    <style>{STYLE}    </style>\n"));
    out.push_str("</head>\n<body>\n");

    out.push_str("    <div class=\"header\">\n");
    out.push_str(&format!("        <h1>{title}</h1>\n"));
    out.push_str("        <div class=\"metadata\">\n");
    out.push_str(&format!(
        "            <span class=\"badge\">{}</span>\n",
        escape(&doc.status)
    ));
    if let Some(priority) = present(&doc.priority) {
        out.push_str(&format!(
            "            <span class=\"badge priority-{}\">{}</span>\n",
            class_token(priority),
            escape(priority)
        ));
    }
    out.push_str("        </div>\n    </div>\n\n");

    out.push_str("    <div class=\"doc-info\">\n        <div class=\"info-grid\">\n");
    for (label, value) in [
        ("ID", &doc.id),
        ("Version", &doc.version),
        ("Owner", &doc.owner.name),
        ("Created", &doc.created_date),
    ] {
        out.push_str(&format!(
            "            <div><strong>{label}:</strong> {}</div>\n",
            escape(value)
        ));
    }
    out.push_str("        </div>\n    </div>\n\n");

    out.push_str("    <section class=\"section\">\n        <h2>Overview</h2>\n");
    for (heading, body) in [
        ("Problem Statement", &doc.overview.problem_statement),
        ("Solution Summary", &doc.overview.solution_summary),
    ] {
        out.push_str("        <div class=\"subsection\">\n");
        out.push_str(&format!("            <h3>{heading}</h3>\n"));
        out.push_str(&format!("            <p>{}</p>\n", escape(body)));
        out.push_str("        </div>\n");
    }
    out.push_str("    </section>\n\n");

    out.push_str("    <section class=\"section\">\n        <h2>Objectives</h2>\n");
    if !doc.objectives.business_goals.is_empty() {
        out.push_str("        <div class=\"subsection\">\n");
        out.push_str("            <h3>Business Goals</h3>\n            <ul>\n");
        for goal in &doc.objectives.business_goals {
            out.push_str(&format!("                <li>{}</li>\n", escape(goal)));
        }
        out.push_str("            </ul>\n        </div>\n");
    }
    out.push_str("    </section>\n\n");

    out.push_str("    <section class=\"section\">\n        <h2>Requirements</h2>\n");
    if !doc.requirements.functional.is_empty() {
        out.push_str("        <div class=\"subsection\">\n");
        out.push_str("            <h3>Functional Requirements</h3>\n            <table>\n");
        out.push_str("                <thead>\n");
        out.push_str(
            "                    <tr><th>ID</th><th>Description</th><th>Priority</th></tr>\n",
        );
        out.push_str("                </thead>\n                <tbody>\n");
        for req in &doc.requirements.functional {
            out.push_str(&format!(
                "                    <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&req.id),
                escape(&req.description),
                escape(present(&req.priority).unwrap_or("TBD"))
            ));
        }
        out.push_str("                </tbody>\n            </table>\n        </div>\n");
    }
    out.push_str("    </section>\n\n");

    out.push_str("    <footer>\n");
    out.push_str(&format!(
        "        <p>Generated on {}</p>\n",
        generated_at.format("%B %-d, %Y at %-I:%M %p")
    ));
    out.push_str("    </footer>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FunctionalRequirement;
    use crate::templates::Template;
    use chrono::NaiveDate;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn page_structure() {
        let doc = Template::Feature.build(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let html = render(&doc, generated());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("<title>[TEMPLATE] New Product Feature - PRD</title>"));
        assert!(html.contains("<span class=\"badge\">draft</span>"));
        assert!(html.contains("<span class=\"badge priority-high\">high</span>"));
        assert!(html.contains("<div><strong>ID:</strong> PRD-FEATURE-TEMPLATE</div>"));
        assert!(html.contains("<li>Increase user engagement metrics</li>"));
        assert!(html.contains("<tr><td>FR-002</td>"));
        assert!(html.contains("Generated on January 2, 2024 at 3:04 PM"));
    }

    #[test]
    fn document_text_is_escaped() {
        let mut doc = Template::Basic.build(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        doc.title = "<script>alert(1)</script>".into();
        doc.requirements.functional = vec![FunctionalRequirement::new("FR-001", "a & b")];
        let html = render(&doc, generated());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<td>a &amp; b</td><td>TBD</td>"));
    }

    #[test]
    fn unset_priority_has_no_badge() {
        let mut doc = Template::Basic.build(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        doc.priority = None;
        assert!(!render(&doc, generated()).contains("badge priority-"));
    }
}
