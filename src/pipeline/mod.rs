//! The packaging pipeline.
//!
//! Runs in a fixed order with no retries:
//! 1. `cargo build --release`
//! 2. copy the extractor into the asset tree
//! 3. run the extractor on the asset tree
//! 4. run the scrubber on the graphics directory
//! 5. read `info.json`
//! 6. zip the asset tree into `<build_dir>/<name>_<version>.zip`
//!
//! Nothing is rolled back on failure. A run that stops after step 2 leaves
//! the staged binary and any generated graphics in place.

pub mod build;
pub mod stage;
pub mod tools;

use anyhow::{Context, Result};
use std::fs;
use std::time::Instant;

use crate::archive::{self, ArchiveSummary};
use crate::checksum;
use crate::config::Config;
use crate::metadata::ModInfo;
use crate::timing::{format_duration, Timer};

pub use build::BuildOutcome;

/// Knobs for a single packaging run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageOptions {
    /// Don't run the release build; use binaries already on disk.
    pub skip_build: bool,
    /// Abort when the release build fails.
    pub strict_build: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub info: ModInfo,
    pub archive: ArchiveSummary,
    /// SHA-256 of the archive, also written to its sidecar.
    pub sha256: String,
    pub build: BuildOutcome,
}

/// Run the whole pipeline.
pub fn package(config: &Config, options: PackageOptions) -> Result<PackageReport> {
    println!("=== Packaging mod ===\n");
    let started = Instant::now();

    let build = if options.skip_build {
        println!("Skipping release build.");
        BuildOutcome::Skipped
    } else {
        let t = Timer::start("Release build");
        let outcome = build::build_tools(config, options.strict_build || config.strict_build)?;
        t.finish();
        outcome
    };

    let staged = stage::stage_extractor(config)?;

    let t = Timer::start("Extract graphics");
    tools::run_extractor(config, &staged)?;
    t.finish();

    let t = Timer::start("Scrub graphics");
    tools::run_scrubber(config)?;
    t.finish();

    let info = ModInfo::load(&config.info_path())?;
    println!("\nPackaging {} {}", info.name, info.version);

    fs::create_dir_all(&config.build_dir)
        .with_context(|| format!("Failed to create {}", config.build_dir.display()))?;
    let output = config.build_dir.join(info.archive_name());

    let t = Timer::start("Write archive");
    let summary = archive::write_archive(&config.asset_dir, &output)?;
    t.finish();

    let sha256 = checksum::write_sidecar(&output)?;

    println!("\n=== Package complete ===");
    println!("  Archive: {}", summary.path.display());
    println!(
        "  Entries: {} ({} files, {} directories, {} bytes)",
        summary.entries(),
        summary.files,
        summary.dirs,
        summary.bytes
    );
    println!("  SHA-256: {}", sha256);
    println!("  Total time: {}", format_duration(started.elapsed()));

    Ok(PackageReport {
        info,
        archive: summary,
        sha256,
        build,
    })
}
