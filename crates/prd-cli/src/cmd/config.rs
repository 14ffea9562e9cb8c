use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use prd_core::config::{config_path, Config, WarnLevel};
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Write a default .prd/config.yaml
    Init {
        /// Default owner name
        #[arg(long)]
        owner_name: Option<String>,
        /// Default owner email
        #[arg(long)]
        owner_email: Option<String>,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Init {
            owner_name,
            owner_email,
            force,
        } => init(root, owner_name, owner_email, force, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    if json {
        print_json(&config)?;
    } else {
        let path = config_path(root);
        if !path.exists() {
            println!("# no config file at {}; showing defaults", path.display());
        }
        print!("{}", serde_yaml::to_string(&config)?);
    }
    Ok(())
}

fn init(
    root: &Path,
    owner_name: Option<String>,
    owner_email: Option<String>,
    force: bool,
    json: bool,
) -> anyhow::Result<()> {
    let path = config_path(root);
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    if owner_name.is_some() || owner_email.is_some() {
        config.defaults.owner = Some(prd_core::document::Owner::new(
            owner_name.unwrap_or_default(),
            owner_email.unwrap_or_default(),
        ));
    }
    config.save(root).context("failed to write config")?;
    tracing::info!(path = %path.display(), "wrote config");

    if json {
        print_json(&serde_json::json!({ "path": path }))?;
    } else {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
