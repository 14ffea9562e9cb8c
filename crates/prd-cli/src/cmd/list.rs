use crate::display::{last_updated, truncate};
use crate::output::{print_json, print_table};
use anyhow::Context;
use colored::Colorize;
use prd_core::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Summary {
    file: String,
    id: String,
    title: String,
    status: String,
    owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
}

/// `*.json` files directly inside `dir`, sorted by name.
fn json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("cannot read '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn run(root: &Path, dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let dir = match dir {
        Some(d) => crate::root::resolve_file(root, d),
        None => root.to_path_buf(),
    };

    let mut summaries = Vec::new();
    for path in json_files(&dir)? {
        let doc = match Document::load(&path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable PRD");
                continue;
            }
        };
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        summaries.push(Summary {
            file,
            last_updated: last_updated(&doc),
            id: doc.id,
            title: doc.title,
            status: doc.status,
            owner: doc.owner.name,
        });
    }

    if json {
        print_json(&summaries)?;
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No PRD files found in directory.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = summaries
        .into_iter()
        .map(|s| {
            vec![
                s.file,
                s.id,
                truncate(&s.title, 30),
                s.status,
                s.owner,
                s.last_updated.unwrap_or_else(|| "N/A".to_string()),
            ]
        })
        .collect();
    println!("{}", "📋 PRD Documents".cyan());
    print_table(
        &["File", "ID", "Title", "Status", "Owner", "Last Updated"],
        rows,
    );
    Ok(())
}
