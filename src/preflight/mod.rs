//! Preflight checks for packaging.
//!
//! Validates the build program, helper binaries and repository layout
//! before the pipeline runs. Run with `scpack preflight`.

mod host_tools;
mod layout;
mod types;

use anyhow::{bail, Result};

use crate::config::Config;

pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Run all preflight checks.
///
/// `skip_build` checks for a `package --skip-build` run: cargo is not
/// needed and the helper binaries must already be built.
pub fn run_preflight(config: &Config, skip_build: bool) -> PreflightReport {
    let mut checks = Vec::new();

    println!("Running preflight checks...\n");

    println!("Checking host tools...");
    checks.extend(host_tools::check_host_tools(config, skip_build));

    println!("Checking repository layout...");
    checks.extend(layout::check_layout(config));

    println!();

    PreflightReport { checks }
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(config: &Config, skip_build: bool) -> Result<()> {
    let report = run_preflight(config, skip_build);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before packaging.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}
