//! Extractor and scrubber invocations.
//!
//! Both tools are opaque. Each gets a single directory argument, runs in the
//! repository root with inherited stdio, and must exit 0.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::process::Cmd;

/// Run the staged extractor against the asset tree.
pub fn run_extractor(config: &Config, staged: &Path) -> Result<()> {
    println!("Extracting graphics into {}...", config.asset_dir.display());
    Cmd::new(staged)
        .arg_path(&config.asset_dir)
        .dir(&config.root)
        .error_msg(format!("Graphics extractor {} failed", staged.display()))
        .run_interactive()?;
    Ok(())
}

/// Run the scrubber from the release directory against the graphics tree.
pub fn run_scrubber(config: &Config) -> Result<()> {
    let scrubber = config.scrubber_path();
    let graphics = config.graphics_dir();
    println!("Scrubbing {}...", graphics.display());
    Cmd::new(&scrubber)
        .arg_path(&graphics)
        .dir(&config.root)
        .error_msg(format!("Scrubber {} failed", scrubber.display()))
        .run_interactive()?;
    Ok(())
}
