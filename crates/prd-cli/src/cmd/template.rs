use crate::display;
use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::Local;
use clap::Subcommand;
use colored::Colorize;
use prd_core::config::Config;
use prd_core::templates::Template;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum TemplateSubcommand {
    /// List available templates
    List,
    /// Show the content of a template
    Show { name: String },
    /// Create a PRD from a template
    Create {
        name: String,
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(root: &Path, subcmd: TemplateSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TemplateSubcommand::List => list(json),
        TemplateSubcommand::Show { name } => show(root, &name, json),
        TemplateSubcommand::Create { name, file, force } => {
            create(root, &name, &file, force, json)
        }
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<serde_json::Value> = Template::all()
            .iter()
            .map(|t| serde_json::json!({ "name": t.as_str(), "description": t.description() }))
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    println!("{}", "📋 Available PRD Templates".cyan());
    let rows = Template::all()
        .iter()
        .map(|t| vec![t.as_str().to_string(), t.description().to_string()])
        .collect();
    print_table(&["Name", "Description"], rows);
    println!("\nUsage: prd-manager template create <template-name> <filename>");
    Ok(())
}

fn show(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let doc = name.parse::<Template>()?.build(Local::now().date_naive());
    if json {
        println!("{}", doc.to_json().context("failed to encode template")?);
        return Ok(());
    }
    let config = Config::load(root).context("failed to load config")?;
    println!("{}: {name}", "Template".cyan());
    print!("{}", display::pretty(&doc, None, config.view.wrap_width.max(1)));
    Ok(())
}

fn create(root: &Path, name: &str, file: &Path, force: bool, json: bool) -> anyhow::Result<()> {
    let template = name.parse::<Template>()?;
    let path = crate::root::resolve_file(root, file);
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::load(root).context("failed to load config")?;
    let mut doc = template.build(Local::now().date_naive());
    super::create::apply_owner(&mut doc, &config, None, None);
    doc.touch();
    doc.save(&path)
        .with_context(|| format!("failed to save PRD '{}'", path.display()))?;

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "template": template.as_str(),
            "id": doc.id,
        }))?;
    } else {
        println!(
            "{}",
            format!("✅ PRD created from '{template}' template: {}", path.display()).green()
        );
    }
    Ok(())
}
