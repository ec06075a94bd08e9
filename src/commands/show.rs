//! Show command - displays information.

use anyhow::{bail, Result};

use crate::archive;
use crate::checksum;
use crate::config::Config;
use crate::metadata::ModInfo;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show resolved configuration
    Config,
    /// Show info.json and the archive name it implies
    Info,
    /// List the archive for the current version
    Archive,
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => config.print(),
        ShowTarget::Info => ModInfo::load(&config.info_path())?.print(),
        ShowTarget::Archive => {
            let info = ModInfo::load(&config.info_path())?;
            let path = config.build_dir.join(info.archive_name());
            if !path.exists() {
                bail!(
                    "Archive not found: {}\nRun 'scpack package' first.",
                    path.display()
                );
            }
            archive::print_entries(&path)?;
            match checksum::read_sidecar(&path) {
                Some(expected) => {
                    let actual = checksum::sha256_file(&path)?;
                    if actual == expected {
                        println!("SHA-256: {} (matches sidecar)", actual);
                    } else {
                        eprintln!(
                            "[WARN] SHA-256 mismatch: sidecar {} but archive is {}",
                            expected, actual
                        );
                    }
                }
                None => println!("No checksum sidecar found."),
            }
        }
    }
    Ok(())
}
