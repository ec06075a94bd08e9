//! scpack - StarCraft graphics mod packager.
//!
//! Builds the helper binaries, extracts and scrubs the graphics, then zips
//! the asset tree into `build/<name>_<version>.zip`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scpack::commands;
use scpack::config::Config;
use scpack::pipeline::PackageOptions;

#[derive(Parser)]
#[command(name = "scpack")]
#[command(about = "Build, extract, scrub and package the StarCraft graphics mod")]
#[command(
    after_help = "QUICK START:\n  scpack            Build and package everything\n  scpack preflight  Check the repository is ready\n  scpack show info  Show mod name and version\n  scpack clean      Remove build outputs"
)]
struct Cli {
    /// Repository root (default: current directory)
    #[arg(short = 'C', long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tools and package the mod (default)
    Package {
        /// Use the binaries already in the release directory
        #[arg(long)]
        skip_build: bool,

        /// Abort if the release build fails
        #[arg(long)]
        strict_build: bool,
    },

    /// Run preflight checks (verify the repository before packaging)
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,

        /// Check for a `package --skip-build` run
        #[arg(long)]
        skip_build: bool,
    },

    /// Clean produced artifacts (default: build outputs only)
    Clean {
        #[command(subcommand)]
        what: Option<CleanTarget>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum CleanTarget {
    /// Remove the build directory
    Outputs,
    /// Remove the staged extractor from the asset tree
    Staged,
    /// Remove outputs and the staged extractor
    All,
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show info.json and the archive name
    Info,
    /// List the contents of the current archive
    Archive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let config = Config::load(&root);

    match cli.command {
        None => {
            commands::cmd_package(&config, PackageOptions::default())?;
        }

        Some(Commands::Package {
            skip_build,
            strict_build,
        }) => {
            let options = PackageOptions {
                skip_build,
                strict_build,
            };
            commands::cmd_package(&config, options)?;
        }

        Some(Commands::Preflight { strict, skip_build }) => {
            commands::cmd_preflight(&config, strict, skip_build)?;
        }

        Some(Commands::Clean { what }) => {
            let clean_target = match what {
                None | Some(CleanTarget::Outputs) => commands::clean::CleanTarget::Outputs,
                Some(CleanTarget::Staged) => commands::clean::CleanTarget::Staged,
                Some(CleanTarget::All) => commands::clean::CleanTarget::All,
            };
            commands::cmd_clean(&config, clean_target)?;
        }

        Some(Commands::Show { what }) => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Info => commands::show::ShowTarget::Info,
                ShowTarget::Archive => commands::show::ShowTarget::Archive,
            };
            commands::cmd_show(&config, show_target)?;
        }
    }

    Ok(())
}
