//! Shared test utilities for scpack tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use scpack::config::Config;

/// Extractor that writes two unit sprites into `<asset_dir>/graphics/units`.
pub const EXTRACTOR_OK: &str = r#"#!/bin/sh
set -e
mkdir -p "$1/graphics/units"
printf 'marine-pixels' > "$1/graphics/units/marine.png"
printf 'zealot-pixels' > "$1/graphics/units/zealot.png"
"#;

/// Scrubber that blanks every sprite under the directory it is given.
pub const SCRUBBER_OK: &str = r#"#!/bin/sh
set -e
for f in "$1"/units/*.png; do
    printf 'scrubbed' > "$f"
done
"#;

/// Tool that fails with a recognizable exit code.
pub const TOOL_FAILS: &str = "#!/bin/sh\necho 'tool exploded' >&2\nexit 7\n";

/// Temporary repository laid out like the real one:
/// `luasrc/` asset tree, `target/release/` binaries, `build/` output.
pub struct TestRepo {
    /// Temporary directory (kept alive for lifetime of TestRepo)
    pub _temp_dir: TempDir,
    pub config: Config,
}

impl TestRepo {
    /// Repository with an asset tree, metadata and working mock tools.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = Config::with_defaults(temp_dir.path());
        // `true build --release` stands in for a successful cargo build.
        config.cargo = "true".to_string();

        fs::create_dir_all(config.asset_dir.join("locale/en")).expect("Failed to create asset tree");
        fs::create_dir_all(&config.release_dir).expect("Failed to create release dir");
        fs::write(config.asset_dir.join("control.lua"), "require('util')\n")
            .expect("Failed to write control.lua");
        fs::write(
            config.asset_dir.join("locale/en/strings.cfg"),
            "[mod-name]\nfoo=Foo\n",
        )
        .expect("Failed to write locale");

        let repo = Self {
            _temp_dir: temp_dir,
            config,
        };
        repo.write_info(r#"{"name": "foo", "version": "1.2.3", "title": "Foo"}"#);
        repo.install_extractor(EXTRACTOR_OK);
        repo.install_scrubber(SCRUBBER_OK);
        repo
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn write_info(&self, json: &str) {
        fs::write(self.config.info_path(), json).expect("Failed to write info.json");
    }

    pub fn install_extractor(&self, script: &str) {
        create_mock_binary(&self.config.extractor_path(), script);
    }

    pub fn install_scrubber(&self, script: &str) {
        create_mock_binary(&self.config.scrubber_path(), script);
    }

    /// Where the archive for foo 1.2.3 lands.
    pub fn expected_archive(&self) -> PathBuf {
        self.config.build_dir.join("foo_1.2.3.zip")
    }
}

/// Write an executable shell script.
pub fn create_mock_binary(path: &Path, script: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for binary");
    }
    fs::write(path, script).expect("Failed to create mock binary");

    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// Relative names of everything under `root`, directories with a trailing `/`.
pub fn tree_entries(root: &Path) -> BTreeSet<String> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.expect("walk failed"))
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .expect("entry outside root")
                .to_string_lossy()
                .into_owned();
            if e.file_type().is_dir() {
                format!("{}/", rel)
            } else {
                rel
            }
        })
        .collect()
}

/// Entry names of an archive, in stored order.
pub fn archive_entries(path: &Path) -> Vec<String> {
    let mut zip = scpack::archive::open_archive(path).expect("Failed to open archive");
    (0..zip.len())
        .map(|i| {
            zip.by_index(i)
                .expect("Failed to read entry")
                .name()
                .to_string()
        })
        .collect()
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.is_file(), "Expected file at {}", path.display());
}

/// Assert that nothing exists at a path.
pub fn assert_missing(path: &Path) {
    assert!(!path.exists(), "Expected nothing at {}", path.display());
}
