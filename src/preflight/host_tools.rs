//! Host tool availability checks.

use std::path::Path;

use crate::config::Config;
use crate::process::{self, Cmd};

use super::types::CheckResult;

/// Check the build program and the built helper binaries.
///
/// With `skip_build` the release build won't run, so the build program is
/// not needed and the helper binaries must already exist.
pub fn check_host_tools(config: &Config, skip_build: bool) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if skip_build {
        results.push(CheckResult::skip("cargo", "release build skipped"));
    } else {
        results.push(check_cargo(&config.cargo));
    }

    results.push(check_built_binary("extractor", &config.extractor_path(), skip_build));
    results.push(check_built_binary("scrubber", &config.scrubber_path(), skip_build));

    results
}

/// Resolve the build program and report its version.
pub fn check_cargo(cargo: &str) -> CheckResult {
    let Some(path) = process::which(cargo) else {
        return CheckResult::fail(
            "cargo",
            &format!("'{}' not found. Install a Rust toolchain or set CARGO.", cargo),
        );
    };

    match Cmd::new(&path).arg("--version").run() {
        Ok(result) if !result.stdout_trimmed().is_empty() => {
            CheckResult::pass_with("cargo", result.stdout_trimmed())
        }
        Ok(_) => CheckResult::pass_with("cargo", &path.display().to_string()),
        Err(e) => CheckResult::fail("cargo", &format!("{:#}", e)),
    }
}

fn check_built_binary(label: &str, path: &Path, required: bool) -> CheckResult {
    if path.is_file() {
        CheckResult::pass_with(label, &path.display().to_string())
    } else if required {
        CheckResult::fail(
            label,
            &format!("{} not built and the release build is skipped", path.display()),
        )
    } else {
        CheckResult::warn(
            label,
            &format!("{} not built yet - the release build will create it", path.display()),
        )
    }
}
