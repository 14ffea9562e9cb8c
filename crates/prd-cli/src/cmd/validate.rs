use crate::output::print_json;
use colored::Colorize;
use prd_core::report::LintWarning;
use std::path::Path;

pub fn run(root: &Path, file: &Path, strict: bool, json: bool) -> anyhow::Result<()> {
    let (path, doc) = super::load_document(root, file)?;
    let outcome = doc.validate();
    // Warnings are only meaningful once the document passes.
    let warnings: Vec<LintWarning> = if strict && outcome.is_ok() {
        doc.lint()
    } else {
        Vec::new()
    };

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "valid": outcome.is_ok(),
            "field": outcome.as_ref().err().map(|e| e.field()),
            "error": outcome.as_ref().err().map(|e| e.to_string()),
            "warnings": warnings,
        }))?;
    } else {
        println!("{}", format!("🔍 Validating PRD: {}", doc.title).cyan());
        match &outcome {
            Ok(()) => println!("{}", "✅ PRD validation passed".green()),
            Err(e) => println!("{}", format!("❌ Validation failed: {e}").red()),
        }
        if !warnings.is_empty() {
            println!("{}", "\n⚠️ Warnings:".yellow());
            for w in &warnings {
                println!("  • {}", w.message);
            }
        }
    }

    if let Err(e) = outcome {
        anyhow::bail!("{} failed validation: {e}", path.display());
    }
    Ok(())
}
