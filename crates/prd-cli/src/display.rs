//! Terminal rendering for `view`, `status` and `template show`.

use crate::output::table;
use colored::{ColoredString, Colorize};
use prd_core::document::Document;
use prd_core::markdown::present;

pub const PRETTY_SECTIONS: &[&str] = &[
    "header",
    "overview",
    "objectives",
    "requirements",
    "stories",
    "timeline",
    "technical",
    "risks",
];

pub const TABLE_SECTIONS: &[&str] = &["overview", "requirements", "stories", "milestones"];

const RULE: &str = "─────────────────────────────────────────────────────────────";
const DOUBLE_RULE: &str = "═══════════════════════════════════════════════════════════════";

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Greedy word wrap. Text that already fits is returned unchanged.
pub fn wrap_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut line_len = 0;
    for (i, word) in text.split_whitespace().enumerate() {
        let word_len = word.chars().count();
        if i > 0 && line_len + word_len + 1 > width {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }
    out
}

/// Cut `s` to at most `max` characters, ending in `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

pub fn status_color(status: &str) -> ColoredString {
    match status {
        "draft" => status.yellow(),
        "review" => status.cyan(),
        "approved" => status.green(),
        "in_development" => status.blue(),
        "completed" => status.green().bold(),
        "archived" => status.bright_black(),
        _ => status.normal(),
    }
}

pub fn priority_color(priority: &str) -> ColoredString {
    match priority {
        "critical" => priority.red().bold(),
        "high" => priority.red(),
        "medium" => priority.yellow(),
        "low" => priority.green(),
        _ => priority.normal(),
    }
}

fn impact_color(impact: &str) -> ColoredString {
    match impact {
        "high" | "critical" => impact.red(),
        "low" => impact.green(),
        _ => impact.yellow(),
    }
}

fn joined_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn last_updated(doc: &Document) -> Option<String> {
    doc.last_updated
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
}

// ---------------------------------------------------------------------------
// Pretty view
// ---------------------------------------------------------------------------

/// Render every section, or only `section` when given. The caller checks
/// `section` against `PRETTY_SECTIONS`.
pub fn pretty(doc: &Document, section: Option<&str>, width: usize) -> String {
    let wants = |name: &str| section.map_or(true, |s| s == name);
    let mut out = String::new();
    if wants("header") {
        header(&mut out, doc);
    }
    if wants("overview") {
        overview(&mut out, doc, width);
    }
    if wants("objectives") {
        objectives(&mut out, doc);
    }
    if wants("requirements") {
        requirements(&mut out, doc, width);
    }
    if wants("stories") {
        stories(&mut out, doc);
    }
    if wants("timeline") {
        timeline(&mut out, doc);
    }
    if wants("technical") {
        technical(&mut out, doc, width);
    }
    if wants("risks") {
        risks(&mut out, doc);
    }
    out
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n{RULE}\n", title.yellow()));
}

fn header(out: &mut String, doc: &Document) {
    out.push_str(&format!("{DOUBLE_RULE}\n📋 {}\n{DOUBLE_RULE}\n\n", doc.title.cyan()));
    out.push_str(&format!("🆔 ID: {}\n", doc.id));
    out.push_str(&format!("📦 Version: {}\n", doc.version));
    out.push_str(&format!("📊 Status: {}\n", status_color(&doc.status)));
    if let Some(p) = present(&doc.priority) {
        out.push_str(&format!("⚡ Priority: {}\n", priority_color(p)));
    }
    out.push_str(&format!("👤 Owner: {} ({})\n", doc.owner.name, doc.owner.email));
    if let Some(team) = present(&doc.owner.team) {
        out.push_str(&format!("🏢 Team: {team}\n"));
    }
    out.push_str(&format!("📅 Created: {}\n", doc.created_date));
    if let Some(ts) = last_updated(doc) {
        out.push_str(&format!("🔄 Last Updated: {ts}\n"));
    }
    out.push('\n');
}

fn overview(out: &mut String, doc: &Document, width: usize) {
    let o = &doc.overview;
    heading(out, "📝 OVERVIEW");
    out.push_str(&format!(
        "🎯 Problem Statement:\n{}\n\n",
        wrap_text(&o.problem_statement, width)
    ));
    out.push_str(&format!(
        "💡 Solution Summary:\n{}\n\n",
        wrap_text(&o.solution_summary, width)
    ));
    if let Some(text) = present(&o.target_audience) {
        out.push_str(&format!("👥 Target Audience:\n{}\n\n", wrap_text(text, width)));
    }
    if let Some(text) = present(&o.market_context) {
        out.push_str(&format!("📈 Market Context:\n{}\n\n", wrap_text(text, width)));
    }
}

fn objectives(out: &mut String, doc: &Document) {
    let o = &doc.objectives;
    heading(out, "🎯 OBJECTIVES");
    if !o.business_goals.is_empty() {
        out.push_str("🏢 Business Goals:\n");
        for (i, goal) in o.business_goals.iter().enumerate() {
            out.push_str(&format!("  {}. {goal}\n", i + 1));
        }
        out.push('\n');
    }
    if !o.success_metrics.is_empty() {
        out.push_str("📊 Success Metrics:\n");
        for m in &o.success_metrics {
            out.push_str(&format!("  • {}: {}\n", m.metric.cyan(), m.target));
            if let Some(method) = present(&m.measurement_method) {
                out.push_str(&format!("    Method: {method}\n"));
            }
        }
        out.push('\n');
    }
    if !o.okrs.is_empty() {
        out.push_str("🎯 OKRs:\n");
        for (i, okr) in o.okrs.iter().enumerate() {
            out.push_str(&format!("  {} {}\n", format!("O{}:", i + 1).cyan(), okr.objective));
            for (j, kr) in okr.key_results.iter().enumerate() {
                out.push_str(&format!(
                    "    {} {kr}\n",
                    format!("KR{}.{}:", i + 1, j + 1).green()
                ));
            }
        }
        out.push('\n');
    }
}

fn requirements(out: &mut String, doc: &Document, width: usize) {
    let r = &doc.requirements;
    let inner = width.saturating_sub(2).max(1);
    heading(out, "⚙️ REQUIREMENTS");
    if !r.functional.is_empty() {
        out.push_str("🔧 Functional Requirements:\n");
        for req in &r.functional {
            let priority = present(&req.priority)
                .map(|p| format!(" [{}]", priority_color(p)))
                .unwrap_or_default();
            out.push_str(&format!("  • {}{priority}\n", req.id.cyan()));
            out.push_str(&format!("    {}\n", wrap_text(&req.description, inner)));
            if !req.dependencies.is_empty() {
                out.push_str(&format!("    Dependencies: {}\n", req.dependencies.join(", ")));
            }
        }
        out.push('\n');
    }
    if !r.non_functional.is_empty() {
        out.push_str("🛡️ Non-Functional Requirements:\n");
        for req in &r.non_functional {
            out.push_str(&format!("  • {} [{}]\n", req.id.cyan(), req.category));
            out.push_str(&format!("    {}\n", wrap_text(&req.description, inner)));
            if let Some(c) = present(&req.acceptance_criteria) {
                out.push_str(&format!("    Criteria: {c}\n"));
            }
        }
        out.push('\n');
    }
}

fn stories(out: &mut String, doc: &Document) {
    if doc.user_stories.is_empty() {
        return;
    }
    heading(out, "📖 USER STORIES");
    for story in &doc.user_stories {
        let priority = present(&story.priority)
            .map(|p| format!(" [{}]", priority_color(p)))
            .unwrap_or_default();
        let estimate = present(&story.effort_estimate)
            .map(|e| format!(" ({e})"))
            .unwrap_or_default();
        out.push_str(&format!("📝 {}{priority}{estimate}\n", story.id.cyan()));
        out.push_str(&format!("   {}\n", story.story));
        if !story.acceptance_criteria.is_empty() {
            out.push_str("   Acceptance Criteria:\n");
            for c in &story.acceptance_criteria {
                out.push_str(&format!("   ✓ {c}\n"));
            }
        }
        out.push('\n');
    }
}

fn timeline(out: &mut String, doc: &Document) {
    let Some(t) = &doc.timeline else {
        return;
    };
    heading(out, "📅 TIMELINE");
    if let Some(date) = present(&t.launch_date) {
        out.push_str(&format!("🚀 Launch Date: {}\n\n", date.green()));
    }
    if !t.milestones.is_empty() {
        out.push_str("🏁 Milestones:\n");
        for m in &t.milestones {
            out.push_str(&format!("  • {} - {}\n", m.target_date.cyan(), m.name));
            if let Some(d) = present(&m.description) {
                out.push_str(&format!("    {d}\n"));
            }
            if !m.dependencies.is_empty() {
                out.push_str(&format!("    Dependencies: {}\n", m.dependencies.join(", ")));
            }
        }
        out.push('\n');
    }
}

fn technical(out: &mut String, doc: &Document, width: usize) {
    let Some(tech) = &doc.technical_specifications else {
        return;
    };
    heading(out, "🔧 TECHNICAL SPECIFICATIONS");
    if let Some(text) = present(&tech.architecture_overview) {
        out.push_str(&format!("🏗️ Architecture:\n{}\n\n", wrap_text(text, width)));
    }
    if let Some(stack) = &tech.technology_stack {
        out.push_str("💻 Technology Stack:\n");
        for (label, items) in [
            ("Frontend", &stack.frontend),
            ("Backend", &stack.backend),
            ("Database", &stack.database),
            ("Infrastructure", &stack.infrastructure),
        ] {
            if !items.is_empty() {
                out.push_str(&format!("  {label}: {}\n", items.join(", ")));
            }
        }
        out.push('\n');
    }
    if !tech.security_considerations.is_empty() {
        out.push_str("🔒 Security Considerations:\n");
        for item in &tech.security_considerations {
            out.push_str(&format!("  • {item}\n"));
        }
        out.push('\n');
    }
}

fn risks(out: &mut String, doc: &Document) {
    let Some(ra) = &doc.risks_and_assumptions else {
        return;
    };
    heading(out, "⚠️ RISKS & ASSUMPTIONS");
    if !ra.risks.is_empty() {
        out.push_str("⚠️ Risks:\n");
        for r in &ra.risks {
            out.push_str(&format!(
                "  • {} [Impact: {}, Probability: {}]\n",
                r.description,
                impact_color(&r.impact),
                r.probability
            ));
            if let Some(m) = present(&r.mitigation_strategy) {
                out.push_str(&format!("    Mitigation: {m}\n"));
            }
        }
        out.push('\n');
    }
    if !ra.assumptions.is_empty() {
        out.push_str("📋 Assumptions:\n");
        for a in &ra.assumptions {
            out.push_str(&format!("  • {a}\n"));
        }
        out.push('\n');
    }
}

// ---------------------------------------------------------------------------
// Table view
// ---------------------------------------------------------------------------

/// Title line plus table for one of `TABLE_SECTIONS`; anything else shows
/// the overview.
pub fn tabular(doc: &Document, section: Option<&str>) -> String {
    match section {
        Some("requirements") => {
            if doc.requirements.functional.is_empty() {
                return "No functional requirements found.".to_string();
            }
            let rows = doc
                .requirements
                .functional
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        truncate(&r.description, 40),
                        r.priority.clone().unwrap_or_default(),
                        joined_or_none(&r.dependencies),
                    ]
                })
                .collect();
            titled(
                "Functional Requirements",
                &["ID", "Description", "Priority", "Dependencies"],
                rows,
            )
        }
        Some("stories") => {
            if doc.user_stories.is_empty() {
                return "No user stories found.".to_string();
            }
            let rows = doc
                .user_stories
                .iter()
                .map(|s| {
                    vec![
                        s.id.clone(),
                        truncate(&s.story, 35),
                        s.priority.clone().unwrap_or_default(),
                        s.effort_estimate.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            titled("User Stories", &["ID", "Story", "Priority", "Estimate"], rows)
        }
        Some("milestones") => {
            if doc.milestones().is_empty() {
                return "No milestones found.".to_string();
            }
            let rows = doc
                .milestones()
                .iter()
                .map(|m| {
                    vec![
                        m.name.clone(),
                        m.target_date.clone(),
                        truncate(m.description.as_deref().unwrap_or(""), 25),
                        joined_or_none(&m.dependencies),
                    ]
                })
                .collect();
            titled(
                "Project Milestones",
                &["Name", "Target Date", "Description", "Dependencies"],
                rows,
            )
        }
        _ => {
            let mut rows = vec![
                vec!["ID".to_string(), doc.id.clone()],
                vec!["Title".to_string(), doc.title.clone()],
                vec!["Version".to_string(), doc.version.clone()],
                vec!["Status".to_string(), doc.status.clone()],
                vec!["Priority".to_string(), doc.priority.clone().unwrap_or_default()],
                vec![
                    "Owner".to_string(),
                    format!("{} ({})", doc.owner.name, doc.owner.email),
                ],
                vec!["Created".to_string(), doc.created_date.clone()],
            ];
            if let Some(ts) = last_updated(doc) {
                rows.push(vec!["Last Updated".to_string(), ts]);
            }
            titled("PRD Overview", &["Field", "Value"], rows)
        }
    }
}

fn titled(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    format!("{}\n{}", title.cyan(), table(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prd_core::templates::Template;

    fn feature() -> Document {
        Template::Feature.build(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn wrap_leaves_short_text_alone() {
        assert_eq!(wrap_text("short", 60), "short");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let wrapped = wrap_text("one two three four five", 9);
        assert_eq!(wrapped, "one two\nthree\nfour five");
        assert!(wrapped.lines().all(|l| l.chars().count() <= 9));
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate("abcdefghijk", 10), "abcdefg...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn unknown_words_are_uncoloured() {
        assert_eq!(status_color("bogus").to_string(), "bogus");
        assert_eq!(priority_color("").to_string(), "");
    }

    #[test]
    fn pretty_single_section() {
        let doc = feature();
        let text = pretty(&doc, Some("timeline"), 60);
        assert!(text.contains("TIMELINE"));
        assert!(text.contains("Beta Release"));
        assert!(!text.contains("OVERVIEW"));
    }

    #[test]
    fn pretty_all_sections() {
        let text = pretty(&feature(), None, 60);
        for marker in ["OVERVIEW", "OBJECTIVES", "REQUIREMENTS", "USER STORIES", "RISKS"] {
            assert!(text.contains(marker), "missing {marker}");
        }
        assert!(text.contains("PRD-FEATURE-TEMPLATE"));
    }

    #[test]
    fn table_sections() {
        let doc = feature();
        assert!(tabular(&doc, Some("requirements")).contains("FR-003"));
        let milestones = tabular(&doc, Some("milestones"));
        assert!(milestones.contains("Project Milestones"));
        assert!(milestones.contains("Beta"));
        assert!(tabular(&doc, None).contains("PRD-FEATURE-TEMPLATE"));

        let mut bare = doc.clone();
        bare.timeline = None;
        assert_eq!(tabular(&bare, Some("milestones")), "No milestones found.");
    }
}
