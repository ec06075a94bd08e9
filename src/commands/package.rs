//! Package command - builds the tools and produces the mod archive.

use anyhow::Result;

use crate::config::Config;
use crate::pipeline::{self, PackageOptions};

/// Execute the package command.
pub fn cmd_package(config: &Config, options: PackageOptions) -> Result<()> {
    pipeline::package(config, options)?;
    Ok(())
}
