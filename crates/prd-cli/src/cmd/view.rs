use crate::display::{self, PRETTY_SECTIONS, TABLE_SECTIONS};
use anyhow::Context;
use clap::ValueEnum;
use prd_core::config::Config;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewFormat {
    Pretty,
    Json,
    Table,
}

fn check_section(section: Option<&str>, allowed: &[&str]) -> anyhow::Result<()> {
    match section {
        Some(s) if !allowed.contains(&s) => {
            anyhow::bail!("unknown section '{s}' (expected one of: {})", allowed.join(", "))
        }
        _ => Ok(()),
    }
}

pub fn run(
    root: &Path,
    file: &Path,
    format: ViewFormat,
    section: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let (_, doc) = super::load_document(root, file)?;
    let format = if json { ViewFormat::Json } else { format };

    match format {
        ViewFormat::Json => {
            println!("{}", doc.to_json().context("failed to encode PRD")?);
        }
        ViewFormat::Table => {
            check_section(section, TABLE_SECTIONS)?;
            println!("{}", display::tabular(&doc, section));
        }
        ViewFormat::Pretty => {
            check_section(section, PRETTY_SECTIONS)?;
            let config = Config::load(root).context("failed to load config")?;
            let width = config.view.wrap_width.max(1);
            print!("{}", display::pretty(&doc, section, width));
        }
    }
    Ok(())
}
