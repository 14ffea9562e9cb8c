//! Interactive input helpers shared by `create -i` and `edit`.

use inquire::{Confirm, Select, Text};
use prd_core::document::{FunctionalRequirement, SuccessMetric};
use prd_core::edit::functional_id;
use prd_core::types::RequirementPriority;

pub fn text(label: &str) -> anyhow::Result<String> {
    Ok(Text::new(label).prompt()?.trim().to_string())
}

pub fn text_with_default(label: &str, default: &str) -> anyhow::Result<String> {
    Ok(Text::new(label)
        .with_default(default)
        .prompt()?
        .trim()
        .to_string())
}

/// Blank input means "not set".
pub fn optional(label: &str) -> anyhow::Result<Option<String>> {
    let value = text(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

pub fn confirm(label: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new(label).with_default(false).prompt()?)
}

pub fn select(label: &str, options: Vec<String>) -> anyhow::Result<String> {
    Ok(Select::new(label, options).prompt()?)
}

/// Pick an entry and return its 0-based position.
pub fn select_index(label: &str, options: Vec<String>) -> anyhow::Result<usize> {
    Ok(Select::new(label, options).raw_prompt()?.index)
}

pub fn requirement_priority(label: &str) -> anyhow::Result<String> {
    let options = RequirementPriority::all()
        .iter()
        .map(|p| p.to_string())
        .collect();
    select(label, options)
}

/// Up to `max` entries; an empty answer stops early.
pub fn collect_many(item: &str, max: usize) -> anyhow::Result<Vec<String>> {
    let mut items = Vec::new();
    for i in 1..=max {
        let input = text(&format!("{item} {i} (or press Enter to finish):"))?;
        if input.is_empty() {
            break;
        }
        items.push(input);
    }
    Ok(items)
}

/// Requirements numbered `FR-001` upward in entry order.
pub fn collect_functional(max: usize) -> anyhow::Result<Vec<FunctionalRequirement>> {
    let mut reqs = Vec::new();
    for i in 1..=max {
        let description = text(&format!(
            "Functional Requirement {i} (or press Enter to finish):"
        ))?;
        if description.is_empty() {
            break;
        }
        let priority = requirement_priority("Priority:")?;
        reqs.push(FunctionalRequirement::new(functional_id(i), description).with_priority(priority));
    }
    Ok(reqs)
}

pub fn collect_metrics(max: usize) -> anyhow::Result<Vec<SuccessMetric>> {
    let mut metrics = Vec::new();
    for i in 1..=max {
        let metric = text(&format!("Success Metric {i} (or press Enter to finish):"))?;
        if metric.is_empty() {
            break;
        }
        let target = text("Target Value:")?;
        let measurement_method = optional("Measurement Method (optional):")?;
        metrics.push(SuccessMetric {
            metric,
            target,
            measurement_method,
        });
    }
    Ok(metrics)
}
