use crate::output::print_json;
use anyhow::Context;
use chrono::Local;
use colored::Colorize;
use prd_core::config::Config;
use prd_core::types::ExportFormat;
use prd_core::{html, markdown};
use std::path::{Path, PathBuf};

/// `input` with a trailing `.json` replaced by the format's extension.
pub fn default_output(input: &Path, format: ExportFormat) -> PathBuf {
    let text = input.to_string_lossy();
    let stem = text.strip_suffix(".json").unwrap_or(&text);
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

pub fn run(
    root: &Path,
    file: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let format = match format {
        Some(f) => f.parse::<ExportFormat>()?,
        None => Config::load(root)
            .context("failed to load config")?
            .export_format()
            .context("invalid export.format in config")?,
    };
    let (path, doc) = super::load_document(root, file)?;
    let out = match output {
        Some(o) => crate::root::resolve_file(root, o),
        None => default_output(&path, format),
    };

    let rendered = match format {
        ExportFormat::Markdown => markdown::render(&doc),
        ExportFormat::Html => html::render(&doc, Local::now().naive_local()),
    };
    prd_core::io::write_text(&out, &rendered)
        .with_context(|| format!("failed to write '{}'", out.display()))?;

    if json {
        print_json(&serde_json::json!({
            "format": format.as_str(),
            "output": out,
        }))?;
    } else {
        let label = match format {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Html => "HTML",
        };
        println!(
            "{}",
            format!("✅ PRD exported to {label}: {}", out.display()).green()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_replaces_json_suffix() {
        assert_eq!(
            default_output(Path::new("docs/search.json"), ExportFormat::Markdown),
            PathBuf::from("docs/search.md")
        );
        assert_eq!(
            default_output(Path::new("search.json"), ExportFormat::Html),
            PathBuf::from("search.html")
        );
    }

    #[test]
    fn output_appends_when_no_json_suffix() {
        assert_eq!(
            default_output(Path::new("notes"), ExportFormat::Markdown),
            PathBuf::from("notes.md")
        );
    }
}
