//! Markdown rendering of a whole document.
//!
//! Optional text that is unset or empty is skipped, so a rendered document
//! never contains empty headings.

use crate::document::{Document, TechnologyStack};

/// Non-empty text of an optional field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

fn labelled_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("**{label}:**\n"));
    bullets(out, items);
    out.push('\n');
}

fn paragraph(out: &mut String, heading: &str, body: &str) {
    out.push_str(&format!("{heading}\n\n{body}\n\n"));
}

pub fn render(doc: &Document) -> String {
    let mut out = format!("# {}\n\n", doc.title);
    header(&mut out, doc);
    people(&mut out, doc);
    overview(&mut out, doc);
    objectives(&mut out, doc);
    personas(&mut out, doc);
    stories(&mut out, doc);
    requirements(&mut out, doc);
    technical(&mut out, doc);
    timeline(&mut out, doc);
    risks(&mut out, doc);
    if !doc.out_of_scope.is_empty() {
        out.push_str("## Out of Scope\n\n");
        bullets(&mut out, &doc.out_of_scope);
        out.push('\n');
    }
    appendices(&mut out, doc);
    out
}

fn header(out: &mut String, doc: &Document) {
    out.push_str("| Field | Value |\n|-------|-------|\n");
    out.push_str(&format!("| **ID** | {} |\n", doc.id));
    out.push_str(&format!("| **Version** | {} |\n", doc.version));
    out.push_str(&format!("| **Created Date** | {} |\n", doc.created_date));
    if let Some(ts) = doc.last_updated {
        out.push_str(&format!(
            "| **Last Updated** | {} |\n",
            ts.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out.push_str(&format!("| **Status** | {} |\n", doc.status));
    if let Some(priority) = present(&doc.priority) {
        out.push_str(&format!("| **Priority** | {priority} |\n"));
    }
    out.push('\n');
}

fn people(out: &mut String, doc: &Document) {
    out.push_str("## Owner\n\n");
    out.push_str(&format!("**Name:** {}  \n", doc.owner.name));
    out.push_str(&format!("**Email:** {}  \n", doc.owner.email));
    if let Some(team) = present(&doc.owner.team) {
        out.push_str(&format!("**Team:** {team}  \n"));
    }
    out.push('\n');

    if doc.stakeholders.is_empty() {
        return;
    }
    out.push_str("## Stakeholders\n\n");
    for s in &doc.stakeholders {
        out.push_str(&format!("- **{}** ({})", s.name, s.role));
        if let Some(email) = present(&s.email) {
            out.push_str(&format!(" - {email}"));
        }
        if let Some(team) = present(&s.team) {
            out.push_str(&format!(" - Team: {team}"));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn overview(out: &mut String, doc: &Document) {
    let o = &doc.overview;
    out.push_str("## Overview\n\n");
    paragraph(out, "### Problem Statement", &o.problem_statement);
    paragraph(out, "### Solution Summary", &o.solution_summary);
    if let Some(text) = present(&o.target_audience) {
        paragraph(out, "### Target Audience", text);
    }
    if let Some(text) = present(&o.market_context) {
        paragraph(out, "### Market Context", text);
    }
}

fn objectives(out: &mut String, doc: &Document) {
    let o = &doc.objectives;
    out.push_str("## Objectives\n\n### Business Goals\n\n");
    for (i, goal) in o.business_goals.iter().enumerate() {
        out.push_str(&format!("{}. {goal}\n", i + 1));
    }
    out.push('\n');

    if !o.success_metrics.is_empty() {
        out.push_str("### Success Metrics\n\n");
        out.push_str("| Metric | Target | Measurement Method |\n");
        out.push_str("|--------|--------|--------------------|\n");
        for m in &o.success_metrics {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                m.metric,
                m.target,
                m.measurement_method.as_deref().unwrap_or("")
            ));
        }
        out.push('\n');
    }

    if !o.okrs.is_empty() {
        out.push_str("### OKRs\n\n");
        for okr in &o.okrs {
            out.push_str(&format!("**Objective:** {}\n\n", okr.objective));
            out.push_str("**Key Results:**\n");
            bullets(out, &okr.key_results);
            out.push('\n');
        }
    }
}

fn personas(out: &mut String, doc: &Document) {
    if doc.user_personas.is_empty() {
        return;
    }
    out.push_str("## User Personas\n\n");
    for p in &doc.user_personas {
        out.push_str(&format!("### {}\n\n{}\n\n", p.name, p.description));
        labelled_list(out, "Goals", &p.goals);
        labelled_list(out, "Pain Points", &p.pain_points);
    }
}

fn stories(out: &mut String, doc: &Document) {
    if doc.user_stories.is_empty() {
        return;
    }
    out.push_str("## User Stories\n\n");
    for story in &doc.user_stories {
        out.push_str(&format!("### {}\n\n**Story:** {}\n\n", story.id, story.story));
        labelled_list(out, "Acceptance Criteria", &story.acceptance_criteria);
        if let Some(p) = present(&story.priority) {
            out.push_str(&format!("**Priority:** {p}\n"));
        }
        if let Some(e) = present(&story.effort_estimate) {
            out.push_str(&format!("**Effort Estimate:** {e}\n"));
        }
        out.push('\n');
    }
}

fn requirements(out: &mut String, doc: &Document) {
    out.push_str("## Requirements\n\n### Functional Requirements\n\n");
    for req in &doc.requirements.functional {
        out.push_str(&format!("#### {}\n\n{}\n\n", req.id, req.description));
        if let Some(p) = present(&req.priority) {
            out.push_str(&format!("**Priority:** {p}\n"));
        }
        if !req.dependencies.is_empty() {
            out.push_str("**Dependencies:**\n");
            bullets(out, &req.dependencies);
        }
        out.push('\n');
    }

    if doc.requirements.non_functional.is_empty() {
        return;
    }
    out.push_str("### Non-Functional Requirements\n\n");
    for req in &doc.requirements.non_functional {
        out.push_str(&format!(
            "#### {} ({})\n\n{}\n\n",
            req.id, req.category, req.description
        ));
        if let Some(c) = present(&req.acceptance_criteria) {
            out.push_str(&format!("**Acceptance Criteria:** {c}\n\n"));
        }
    }
}

fn stack(out: &mut String, stack: &TechnologyStack) {
    out.push_str("### Technology Stack\n\n");
    labelled_list(out, "Frontend", &stack.frontend);
    labelled_list(out, "Backend", &stack.backend);
    labelled_list(out, "Database", &stack.database);
    labelled_list(out, "Infrastructure", &stack.infrastructure);
}

fn technical(out: &mut String, doc: &Document) {
    let Some(tech) = &doc.technical_specifications else {
        return;
    };
    out.push_str("## Technical Specifications\n\n");
    if let Some(text) = present(&tech.architecture_overview) {
        paragraph(out, "### Architecture Overview", text);
    }
    if let Some(s) = &tech.technology_stack {
        stack(out, s);
    }
    if !tech.api_specifications.is_empty() {
        out.push_str("### API Specifications\n\n");
        for api in &tech.api_specifications {
            if let (Some(method), Some(endpoint)) = (present(&api.method), present(&api.endpoint)) {
                out.push_str(&format!("#### {method} {endpoint}\n\n"));
            }
            if let Some(d) = present(&api.description) {
                out.push_str(&format!("{d}\n\n"));
            }
            if let Some(f) = present(&api.request_format) {
                out.push_str(&format!("**Request Format:** {f}\n"));
            }
            if let Some(f) = present(&api.response_format) {
                out.push_str(&format!("**Response Format:** {f}\n"));
            }
            out.push('\n');
        }
    }
    if !tech.security_considerations.is_empty() {
        out.push_str("### Security Considerations\n\n");
        bullets(out, &tech.security_considerations);
        out.push('\n');
    }
}

fn timeline(out: &mut String, doc: &Document) {
    let Some(timeline) = &doc.timeline else {
        return;
    };
    out.push_str("## Timeline\n\n");
    if !timeline.milestones.is_empty() {
        out.push_str("### Milestones\n\n");
        for m in &timeline.milestones {
            out.push_str(&format!("#### {}\n\n", m.name));
            if let Some(d) = present(&m.description) {
                out.push_str(&format!("{d}\n\n"));
            }
            out.push_str(&format!("**Target Date:** {}\n", m.target_date));
            if !m.dependencies.is_empty() {
                out.push_str("**Dependencies:**\n");
                bullets(out, &m.dependencies);
            }
            out.push('\n');
        }
    }
    if let Some(date) = present(&timeline.launch_date) {
        out.push_str(&format!("### Launch Date: {date}\n\n"));
    }
}

fn risks(out: &mut String, doc: &Document) {
    let Some(ra) = &doc.risks_and_assumptions else {
        return;
    };
    out.push_str("## Risks and Assumptions\n\n");
    if !ra.risks.is_empty() {
        out.push_str("### Risks\n\n");
        out.push_str("| Risk | Impact | Probability | Mitigation Strategy |\n");
        out.push_str("|------|--------|-------------|--------------------|\n");
        for r in &ra.risks {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.description,
                r.impact,
                r.probability,
                r.mitigation_strategy.as_deref().unwrap_or("")
            ));
        }
        out.push('\n');
    }
    if !ra.assumptions.is_empty() {
        out.push_str("### Assumptions\n\n");
        bullets(out, &ra.assumptions);
        out.push('\n');
    }
}

fn appendices(out: &mut String, doc: &Document) {
    let Some(app) = &doc.appendices else {
        return;
    };
    out.push_str("## Appendices\n\n");
    if let Some(text) = present(&app.research_data) {
        paragraph(out, "### Research Data", text);
    }
    if !app.mockups_wireframes.is_empty() {
        out.push_str("### Mockups and Wireframes\n\n");
        for m in &app.mockups_wireframes {
            if let Some(name) = present(&m.name) {
                out.push_str(&format!("#### {name}\n\n"));
            }
            if let Some(d) = present(&m.description) {
                out.push_str(&format!("{d}\n\n"));
            }
            if let Some(url) = present(&m.url) {
                out.push_str(&format!("[View Mockup]({url})\n\n"));
            }
        }
    }
    if !app.related_documents.is_empty() {
        out.push_str("### Related Documents\n\n");
        for rd in &app.related_documents {
            // Entries without both a title and a link have nothing to point at.
            let (Some(title), Some(url)) = (present(&rd.title), present(&rd.url)) else {
                continue;
            };
            out.push_str(&format!("- [{title}]({url})"));
            if let Some(kind) = present(&rd.doc_type) {
                out.push_str(&format!(" ({kind})"));
            }
            out.push('\n');
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ApiSpecification, RelatedDocument, TechnicalSpecifications};
    use crate::templates::Template;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn basic_document_layout() {
        let doc = Template::Basic.build(today());
        let md = render(&doc);
        assert!(md.starts_with("# [TEMPLATE] Basic Product Feature\n\n| Field | Value |"));
        assert!(md.contains("| **ID** | PRD-BASIC-TEMPLATE |"));
        assert!(md.contains("| **Priority** | medium |"));
        assert!(md.contains("1. [PRIMARY_BUSINESS_GOAL]"));
        assert!(md.contains("#### FR-001\n\nDefine the first functional requirement\n\n**Priority:** must_have\n"));
        assert!(md.contains("#### NFR-001 (performance)"));
        assert!(!md.contains("Last Updated"));
        assert!(!md.contains("## Timeline"));
    }

    #[test]
    fn last_updated_row_when_set() {
        let mut doc = Template::Basic.build(today());
        doc.last_updated = Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 5, 7).unwrap());
        assert!(render(&doc).contains("| **Last Updated** | 2024-03-02 09:05:07 |"));
    }

    #[test]
    fn empty_optional_text_is_skipped() {
        let mut doc = Template::Basic.build(today());
        doc.priority = Some(String::new());
        doc.overview.target_audience = Some(String::new());
        let md = render(&doc);
        assert!(!md.contains("**Priority** |"));
        assert!(!md.contains("### Target Audience"));
    }

    #[test]
    fn epic_renders_every_section() {
        let md = render(&Template::Epic.build(today()));
        for heading in [
            "## Stakeholders",
            "### OKRs",
            "## User Personas",
            "### Technology Stack",
            "**Infrastructure:**",
            "### Security Considerations",
            "### Milestones",
            "### Launch Date: [GENERAL_AVAILABILITY_DATE]",
            "### Risks",
            "### Assumptions",
            "## Out of Scope",
            "### Research Data",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
        // Related documents in the epic template carry no URL.
        assert!(!md.contains("- [Market Research Report]"));
    }

    #[test]
    fn api_specs_and_links() {
        let mut doc = Template::Basic.build(today());
        doc.technical_specifications = Some(TechnicalSpecifications {
            api_specifications: vec![ApiSpecification {
                endpoint: Some("/v1/prds".into()),
                method: Some("GET".into()),
                description: Some("List documents".into()),
                request_format: None,
                response_format: Some("JSON".into()),
            }],
            ..Default::default()
        });
        doc.appendices = Some(crate::document::Appendices {
            related_documents: vec![RelatedDocument {
                title: Some("Design".into()),
                url: Some("https://example.com/d".into()),
                doc_type: Some("design".into()),
            }],
            ..Default::default()
        });
        let md = render(&doc);
        assert!(md.contains("#### GET /v1/prds\n\nList documents\n\n**Response Format:** JSON\n"));
        assert!(md.contains("- [Design](https://example.com/d) (design)\n"));
    }
}
