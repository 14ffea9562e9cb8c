use crate::display::truncate;
use crate::output::print_json;
use crate::prompt;
use anyhow::Context;
use colored::Colorize;
use prd_core::document::{Document, FunctionalRequirement};
use prd_core::edit::{append, get_mut, remove_at, renumber_from, replace_all};
use prd_core::types::{Priority, Status};
use std::path::Path;

pub const SECTIONS: &[&str] = &["basic", "overview", "objectives", "requirements"];

const LIST_ACTIONS: &[&str] = &["add", "remove", "replace_all"];
const REQUIREMENT_ACTIONS: &[&str] = &["add", "remove", "edit", "replace_all"];

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn run(root: &Path, file: &Path, section: Option<&str>, json: bool) -> anyhow::Result<()> {
    if let Some(s) = section {
        if !SECTIONS.contains(&s) {
            anyhow::bail!("section '{s}' not supported for editing");
        }
    }
    let (path, mut doc) = super::load_document(root, file)?;

    println!("{}", format!("📝 Editing PRD: {}", doc.title).cyan());
    let section = match section {
        Some(s) => s.to_string(),
        None => prompt::select("Section to edit:", options(SECTIONS))?,
    };

    match section.as_str() {
        "basic" => edit_basic(&mut doc)?,
        "overview" => edit_overview(&mut doc)?,
        "objectives" => edit_objectives(&mut doc)?,
        "requirements" => edit_requirements(&mut doc)?,
        other => anyhow::bail!("section '{other}' not supported for editing"),
    }

    doc.touch();
    doc.save(&path)
        .with_context(|| format!("failed to save PRD '{}'", path.display()))?;

    if json {
        print_json(&serde_json::json!({ "path": path, "section": section }))?;
    } else {
        println!("{}", format!("✅ PRD updated: {}", path.display()).green());
    }
    Ok(())
}

/// Prompt with the current value; blank input keeps it.
fn keep_or_replace(label: &str, current: &mut String) -> anyhow::Result<()> {
    println!("Current {label}: {}", current.cyan());
    let input = prompt::text(&format!("New {label} (or press Enter to keep current):"))?;
    if !input.is_empty() {
        *current = input;
    }
    Ok(())
}

fn edit_basic(doc: &mut Document) -> anyhow::Result<()> {
    keep_or_replace("Title", &mut doc.title)?;
    keep_or_replace("Version", &mut doc.version)?;

    println!("Current Status: {}", doc.status.cyan());
    if prompt::confirm("Do you want to change the status?")? {
        doc.status = prompt::select(
            "New Status:",
            Status::all().iter().map(|s| s.to_string()).collect(),
        )?;
    }

    println!(
        "Current Priority: {}",
        doc.priority.as_deref().unwrap_or("").cyan()
    );
    if prompt::confirm("Do you want to change the priority?")? {
        doc.priority = Some(prompt::select(
            "New Priority:",
            Priority::all().iter().map(|p| p.to_string()).collect(),
        )?);
    }
    println!("{}", "✅ Basic information updated".green());
    Ok(())
}

fn edit_overview(doc: &mut Document) -> anyhow::Result<()> {
    let o = &mut doc.overview;

    println!("Current Problem Statement:\n{}", o.problem_statement.cyan());
    if prompt::confirm("Do you want to update the problem statement?")? {
        let input = prompt::text("New Problem Statement:")?;
        if !input.is_empty() {
            o.problem_statement = input;
        }
    }

    println!("Current Solution Summary:\n{}", o.solution_summary.cyan());
    if prompt::confirm("Do you want to update the solution summary?")? {
        let input = prompt::text("New Solution Summary:")?;
        if !input.is_empty() {
            o.solution_summary = input;
        }
    }

    println!(
        "Current Target Audience:\n{}",
        o.target_audience.as_deref().unwrap_or("").cyan()
    );
    if prompt::confirm("Do you want to update the target audience?")? {
        if let Some(input) = prompt::optional("New Target Audience:")? {
            o.target_audience = Some(input);
        }
    }
    println!("{}", "✅ Overview updated".green());
    Ok(())
}

fn edit_objectives(doc: &mut Document) -> anyhow::Result<()> {
    println!("{}", "📝 Editing Objectives".yellow());
    let o = &mut doc.objectives;

    println!("\nCurrent Business Goals:");
    for (i, goal) in o.business_goals.iter().enumerate() {
        println!("  {}. {goal}", i + 1);
    }
    if prompt::confirm("Do you want to modify business goals?")? {
        match prompt::select("Action:", options(LIST_ACTIONS))?.as_str() {
            "add" => {
                append(&mut o.business_goals, prompt::collect_many("New Business Goal", 3)?);
            }
            "remove" if !o.business_goals.is_empty() => {
                let labels = o.business_goals.iter().map(|g| truncate(g, 60)).collect();
                let idx = prompt::select_index("Select goal to remove:", labels)?;
                remove_at(&mut o.business_goals, idx)?;
            }
            "replace_all" => {
                replace_all(&mut o.business_goals, prompt::collect_many("Business Goal", 5)?);
            }
            _ => {}
        }
    }

    println!("\nCurrent Success Metrics:");
    for (i, m) in o.success_metrics.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, m.metric, m.target);
    }
    if prompt::confirm("Do you want to modify success metrics?")? {
        match prompt::select("Action:", options(LIST_ACTIONS))?.as_str() {
            "add" => {
                append(&mut o.success_metrics, prompt::collect_metrics(3)?);
            }
            "remove" if !o.success_metrics.is_empty() => {
                let labels = o
                    .success_metrics
                    .iter()
                    .map(|m| format!("{}: {}", m.metric, m.target))
                    .collect();
                let idx = prompt::select_index("Select metric to remove:", labels)?;
                remove_at(&mut o.success_metrics, idx)?;
            }
            "replace_all" => {
                replace_all(&mut o.success_metrics, prompt::collect_metrics(5)?);
            }
            _ => {}
        }
    }
    println!("{}", "✅ Objectives updated".green());
    Ok(())
}

fn requirement_label(req: &FunctionalRequirement) -> String {
    format!("{}: {}", req.id, truncate(&req.description, 50))
}

fn edit_requirements(doc: &mut Document) -> anyhow::Result<()> {
    println!("{}", "⚙️ Editing Requirements".yellow());
    let reqs = &mut doc.requirements.functional;

    println!("\nCurrent Functional Requirements:");
    for (i, req) in reqs.iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            requirement_label(req),
            req.priority.as_deref().unwrap_or("")
        );
    }
    if !prompt::confirm("Do you want to modify functional requirements?")? {
        return Ok(());
    }

    match prompt::select("Action:", options(REQUIREMENT_ACTIONS))?.as_str() {
        "add" => {
            let mut added = prompt::collect_functional(5)?;
            renumber_from(&mut added, reqs.len() + 1);
            append(reqs, added);
        }
        "remove" if !reqs.is_empty() => {
            let labels = reqs.iter().map(requirement_label).collect();
            let idx = prompt::select_index("Select requirement to remove:", labels)?;
            remove_at(reqs, idx)?;
        }
        "edit" if !reqs.is_empty() => {
            let labels = reqs.iter().map(requirement_label).collect();
            let idx = prompt::select_index("Select requirement to edit:", labels)?;
            edit_single(get_mut(reqs, idx)?)?;
        }
        "replace_all" => {
            replace_all(reqs, prompt::collect_functional(5)?);
        }
        _ => {}
    }
    println!("{}", "✅ Requirements updated".green());
    Ok(())
}

fn edit_single(req: &mut FunctionalRequirement) -> anyhow::Result<()> {
    println!("Current Description: {}", req.description);
    if prompt::confirm("Update description?")? {
        let input = prompt::text("New Description:")?;
        if !input.is_empty() {
            req.description = input;
        }
    }

    println!("Current Priority: {}", req.priority.as_deref().unwrap_or(""));
    if prompt::confirm("Update priority?")? {
        req.priority = Some(prompt::requirement_priority("New Priority:")?);
    }

    println!("Current Dependencies: {}", req.dependencies.join(", "));
    if prompt::confirm("Update dependencies?")? {
        let input = prompt::text("Dependencies (comma-separated, or press Enter for none):")?;
        req.dependencies = input
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
    }
    Ok(())
}
