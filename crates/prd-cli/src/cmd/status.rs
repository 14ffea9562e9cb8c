use crate::display::{last_updated, priority_color, status_color};
use crate::output::print_json;
use colored::Colorize;
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let (_, doc) = super::load_document(root, file)?;
    let stats = doc.stats();

    if json {
        print_json(&serde_json::json!({
            "id": doc.id,
            "title": doc.title,
            "version": doc.version,
            "status": doc.status,
            "priority": doc.priority,
            "owner": doc.owner,
            "last_updated": doc.last_updated,
            "valid": doc.validate().is_ok(),
            "stats": stats,
        }))?;
        return Ok(());
    }

    println!("{}\n", format!("📊 PRD Status Report: {}", doc.title).cyan());
    println!("ID: {}", doc.id);
    println!("Version: {}", doc.version);
    println!("Status: {}", status_color(&doc.status));
    println!(
        "Priority: {}",
        priority_color(doc.priority.as_deref().unwrap_or(""))
    );
    println!("Owner: {} ({})", doc.owner.name, doc.owner.email);
    if let Some(ts) = last_updated(&doc) {
        println!("Last Updated: {ts}");
    }

    println!("\n📈 Statistics:");
    println!("• Functional Requirements: {}", stats.functional_requirements);
    println!(
        "• Non-Functional Requirements: {}",
        stats.non_functional_requirements
    );
    println!("• User Stories: {}", stats.user_stories);
    println!("• Business Goals: {}", stats.business_goals);
    println!("• Stakeholders: {}", stats.stakeholders);
    if let Some(n) = stats.milestones {
        println!("• Milestones: {n}");
    }
    Ok(())
}
