//! Repository layout checks (asset tree, metadata, output directory).

use std::fs;

use crate::config::Config;
use crate::metadata::ModInfo;

use super::types::CheckResult;

/// Check the asset tree and output directory.
pub fn check_layout(config: &Config) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if config.asset_dir.is_dir() {
        results.push(CheckResult::pass_with(
            "asset tree",
            &config.asset_dir.display().to_string(),
        ));
    } else {
        results.push(CheckResult::fail(
            "asset tree",
            &format!("{} does not exist", config.asset_dir.display()),
        ));
    }

    match ModInfo::load(&config.info_path()) {
        Ok(info) => results.push(CheckResult::pass_with(
            "info.json",
            &format!("{} -> {}", info.name, info.archive_name()),
        )),
        Err(e) => results.push(CheckResult::fail("info.json", &format!("{:#}", e))),
    }

    if config.graphics_dir().is_dir() {
        results.push(CheckResult::pass("graphics/"));
    } else {
        results.push(CheckResult::warn(
            "graphics/",
            "Missing - the extractor must create it before the scrubber runs",
        ));
    }

    results.push(check_build_dir_writable(config));

    results
}

fn check_build_dir_writable(config: &Config) -> CheckResult {
    let name = "build/ writable";
    let build_dir = &config.build_dir;

    // The pipeline creates the build dir; only test what already exists.
    let Some(existing) = build_dir.ancestors().find(|p| p.is_dir()) else {
        return CheckResult::fail(name, &format!("No existing parent for {}", build_dir.display()));
    };

    let scratch = existing.join(".scpack-preflight-test");
    match fs::write(&scratch, "test") {
        Ok(()) => {
            let _ = fs::remove_file(&scratch);
            if existing == build_dir.as_path() {
                CheckResult::pass(name)
            } else {
                CheckResult::pass_with(name, &format!("will be created under {}", existing.display()))
            }
        }
        Err(e) => CheckResult::fail(name, &format!("Cannot write to {}: {}", existing.display(), e)),
    }
}
