pub mod config;
pub mod create;
pub mod edit;
pub mod export;
pub mod list;
pub mod status;
pub mod template;
pub mod validate;
pub mod view;

use anyhow::Context;
use prd_core::Document;
use std::path::{Path, PathBuf};

/// Resolve `file` against the root and decode it.
pub fn load_document(root: &Path, file: &Path) -> anyhow::Result<(PathBuf, Document)> {
    let path = crate::root::resolve_file(root, file);
    let doc = Document::load(&path)
        .with_context(|| format!("failed to load PRD '{}'", path.display()))?;
    Ok((path, doc))
}
