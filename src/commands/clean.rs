//! Clean command - removes produced artifacts.

use anyhow::Result;

use crate::clean;
use crate::config::Config;

/// Clean target for the clean command.
pub enum CleanTarget {
    /// Remove the build directory (default)
    Outputs,
    /// Remove the staged extractor from the asset tree
    Staged,
    /// Remove both
    All,
}

/// Execute the clean command.
pub fn cmd_clean(config: &Config, target: CleanTarget) -> Result<()> {
    match target {
        CleanTarget::Outputs => {
            clean::clean_outputs(config)?;
        }
        CleanTarget::Staged => {
            clean::clean_staged(config)?;
        }
        CleanTarget::All => clean::clean_all(config)?,
    }
    Ok(())
}
