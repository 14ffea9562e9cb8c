use crate::output::print_json;
use crate::prompt;
use anyhow::Context;
use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use colored::Colorize;
use prd_core::config::Config;
use prd_core::document::{Document, Objectives, Overview, Owner, Requirements};
use prd_core::templates::Template;
use prd_core::types::{Priority, Status};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct CreateArgs {
    /// Output file
    #[arg(default_value = "new_prd.json")]
    pub file: PathBuf,

    /// Run the interactive creation wizard
    #[arg(short, long)]
    pub interactive: bool,

    /// Start from a template: basic, feature, epic
    #[arg(short, long, conflicts_with = "interactive")]
    pub template: Option<String>,

    /// Document id (default: PRD-<unix seconds>)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub owner_name: Option<String>,

    #[arg(long)]
    pub owner_email: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(root: &Path, args: CreateArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let path = crate::root::resolve_file(root, &args.file);
    if path.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    let today = Local::now().date_naive();
    let template = match (&args.template, args.interactive) {
        (Some(name), _) => Some(name.parse::<Template>()?),
        (None, false) => config.default_template(),
        (None, true) => None,
    };

    let (mut doc, source) = if args.interactive {
        let doc = wizard(&config, today)?;
        doc.validate().context("PRD failed validation")?;
        (doc, "wizard".to_string())
    } else if let Some(t) = template {
        (from_template(t, &args, &config, today), t.to_string())
    } else {
        (scaffold(&args, &config, today)?, "scaffold".to_string())
    };

    doc.touch();
    doc.save(&path)
        .with_context(|| format!("failed to save PRD '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), source = %source, "created PRD");

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "id": doc.id,
            "title": doc.title,
            "source": source,
        }))?;
    } else {
        println!(
            "{}",
            format!("✅ PRD created ({source}): {}", path.display()).green()
        );
        if source == "scaffold" {
            println!("Use 'prd-manager edit' to add more details.");
        }
    }
    Ok(())
}

fn default_owner(config: &Config) -> Owner {
    config.defaults.owner.clone().unwrap_or_default()
}

fn owner_from_flags(args: &CreateArgs, config: &Config) -> anyhow::Result<Owner> {
    let mut owner = default_owner(config);
    if let Some(name) = &args.owner_name {
        owner.name = name.clone();
    }
    if owner.name.is_empty() {
        owner.name = prompt::text("Your Name:")?;
    }
    if let Some(email) = &args.owner_email {
        owner.email = email.clone();
    }
    if owner.email.is_empty() {
        owner.email = prompt::text("Your Email:")?;
    }
    Ok(owner)
}

fn scaffold(args: &CreateArgs, config: &Config, today: NaiveDate) -> anyhow::Result<Document> {
    let title = match &args.title {
        Some(t) => t.clone(),
        None => prompt::text("PRD Title:")?,
    };
    let owner = owner_from_flags(args, config)?;
    let id = args
        .id
        .clone()
        .unwrap_or_else(|| format!("PRD-{}", Utc::now().timestamp()));
    Ok(Document::scaffold(id, title, owner, today))
}

/// Template content with any flag or configured owner values laid over it.
fn from_template(t: Template, args: &CreateArgs, config: &Config, today: NaiveDate) -> Document {
    let mut doc = t.build(today);
    if let Some(id) = &args.id {
        doc.id = id.clone();
    }
    if let Some(title) = &args.title {
        doc.title = title.clone();
    }
    apply_owner(
        &mut doc,
        config,
        args.owner_name.as_deref(),
        args.owner_email.as_deref(),
    );
    doc
}

/// Replace a template's placeholder owner with the configured one, then
/// apply any name or email given on the command line.
pub fn apply_owner(
    doc: &mut Document,
    config: &Config,
    name: Option<&str>,
    email: Option<&str>,
) {
    if let Some(owner) = &config.defaults.owner {
        doc.owner = owner.clone();
    }
    if let Some(name) = name {
        doc.owner.name = name.to_string();
    }
    if let Some(email) = email {
        doc.owner.email = email.to_string();
    }
}

fn wizard(config: &Config, today: NaiveDate) -> anyhow::Result<Document> {
    println!("{}", "🚀 Welcome to the PRD Creation Wizard!".cyan());
    println!("Let's create a comprehensive Product Requirements Document.");

    println!("{}", "📋 Basic Information".yellow());
    let id = prompt::text("PRD ID:")?;
    let title = prompt::text("Product/Feature Title:")?;
    let version = prompt::text_with_default("Version:", "1.0.0")?;

    println!("{}", "\n👤 Owner Information".yellow());
    let defaults = default_owner(config);
    let owner = Owner {
        name: prompt::text_with_default("Owner Name:", &defaults.name)?,
        email: prompt::text_with_default("Owner Email:", &defaults.email)?,
        team: prompt::optional("Owner Team (optional):")?.or(defaults.team),
    };

    println!("{}", "\n📊 Status & Priority".yellow());
    let status = prompt::select(
        "Status:",
        Status::all().iter().map(|s| s.to_string()).collect(),
    )?;
    let priority = prompt::select(
        "Priority:",
        Priority::all().iter().map(|p| p.to_string()).collect(),
    )?;

    println!("{}", "\n📝 Product Overview".yellow());
    let overview = Overview {
        problem_statement: prompt::text("Problem Statement:")?,
        solution_summary: prompt::text("Solution Summary:")?,
        target_audience: prompt::optional("Target Audience (optional):")?,
        market_context: None,
    };

    println!("{}", "\n🎯 Business Goals".yellow());
    let business_goals = prompt::collect_many("Business Goal", 3)?;

    println!("{}", "\n⚙️ Functional Requirements".yellow());
    let functional = prompt::collect_functional(5)?;

    Ok(Document {
        id,
        title,
        version,
        created_date: prd_core::document::format_date(today),
        owner,
        status,
        priority: Some(priority),
        overview,
        objectives: Objectives {
            business_goals,
            ..Default::default()
        },
        requirements: Requirements {
            functional,
            ..Default::default()
        },
        ..Default::default()
    })
}
