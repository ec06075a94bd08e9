//! Build artifact cleaning.
//!
//! Only files scpack itself produces are removed. Graphics written by the
//! extractor are indistinguishable from hand-made assets and are left alone.

use anyhow::{Context, Result};
use std::fs;

use crate::config::Config;

/// Remove the archive output directory.
pub fn clean_outputs(config: &Config) -> Result<bool> {
    let build_dir = &config.build_dir;
    if !build_dir.exists() {
        println!("No build outputs to clean.");
        return Ok(false);
    }

    println!("Removing {}...", build_dir.display());
    fs::remove_dir_all(build_dir)
        .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
    Ok(true)
}

/// Remove the extractor copy from the asset tree.
pub fn clean_staged(config: &Config) -> Result<bool> {
    let staged = config.staged_extractor_path();
    if !staged.exists() {
        println!("No staged extractor to clean.");
        return Ok(false);
    }

    println!("Removing {}...", staged.display());
    fs::remove_file(&staged)
        .with_context(|| format!("Failed to remove {}", staged.display()))?;
    Ok(true)
}

/// Remove build outputs and the staged extractor.
pub fn clean_all(config: &Config) -> Result<()> {
    let outputs = clean_outputs(config)?;
    let staged = clean_staged(config)?;
    if outputs || staged {
        println!("Clean complete.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_all_keeps_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_defaults(dir.path());
        fs::create_dir_all(config.graphics_dir()).unwrap();
        fs::create_dir_all(&config.build_dir).unwrap();
        fs::write(config.build_dir.join("foo_1.0.0.zip"), b"zip").unwrap();
        fs::write(config.staged_extractor_path(), b"bin").unwrap();
        fs::write(config.info_path(), "{}").unwrap();

        clean_all(&config).unwrap();

        assert!(!config.build_dir.exists());
        assert!(!config.staged_extractor_path().exists());
        assert!(config.info_path().exists());
        assert!(config.graphics_dir().is_dir());
    }

    #[test]
    fn test_clean_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_defaults(dir.path());
        assert!(!clean_outputs(&config).unwrap());
        assert!(!clean_staged(&config).unwrap());
    }
}
