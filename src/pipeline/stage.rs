//! Staging the extractor binary inside the asset tree.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;

/// Copy the built extractor into the asset tree, replacing any previous copy.
///
/// Permission bits travel with the copy so the staged file stays executable.
pub fn stage_extractor(config: &Config) -> Result<PathBuf> {
    let src = config.extractor_path();
    let dst = config.staged_extractor_path();

    if !src.is_file() {
        bail!(
            "Extractor binary not found: {}\nThe release build did not produce it.",
            src.display()
        );
    }
    if !config.asset_dir.is_dir() {
        bail!("Asset tree not found: {}", config.asset_dir.display());
    }

    println!("Staging {} -> {}", src.display(), dst.display());
    fs::copy(&src, &dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    Ok(dst)
}
