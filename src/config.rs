//! Configuration management for scpack.
//!
//! Reads configuration from a `.env` file in the repository root and from
//! environment variables. Environment variables take precedence over `.env`.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Default asset tree, relative to the repository root.
pub const DEFAULT_ASSET_DIR: &str = "luasrc";
/// Default archive output directory.
pub const DEFAULT_BUILD_DIR: &str = "build";
/// Default cargo target directory.
pub const DEFAULT_TARGET_DIR: &str = "target";
/// Binary that extracts graphics from the game data.
pub const DEFAULT_EXTRACTOR_BIN: &str = "factorio_sc_graphics";
/// Binary that blanks extracted graphics.
pub const DEFAULT_SCRUBBER_BIN: &str = "scrubber";
/// Name of the extractor copy shipped inside the asset tree.
pub const DEFAULT_STAGED_EXTRACTOR: &str = "sc_graphics_extractor";

/// Metadata descriptor inside the asset tree.
pub const INFO_FILE: &str = "info.json";
/// Graphics subdirectory handed to the scrubber.
pub const GRAPHICS_DIR: &str = "graphics";

/// scpack configuration. All paths are absolute.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root; subprocesses run here.
    pub root: PathBuf,
    /// Asset tree that gets packaged (default: luasrc)
    pub asset_dir: PathBuf,
    /// Where the archive is written (default: build)
    pub build_dir: PathBuf,
    /// Directory holding release binaries (default: target/release)
    pub release_dir: PathBuf,
    /// Build program (default: $CARGO or "cargo")
    pub cargo: String,
    /// Built extractor file name
    pub extractor_bin: String,
    /// Built scrubber file name
    pub scrubber_bin: String,
    /// File name of the extractor copy inside the asset tree
    pub staged_extractor: String,
    /// Abort when the build step fails instead of warning.
    pub strict_build: bool,
}

impl Config {
    /// Load configuration from `<root>/.env` and the environment.
    pub fn load(root: &Path) -> Self {
        // Existing variables are never overridden by the file.
        dotenvy::from_path(root.join(".env")).ok();
        Self::from_lookup(root, |key| std::env::var(key).ok())
    }

    /// Configuration with every setting at its default.
    pub fn with_defaults(root: &Path) -> Self {
        Self::from_lookup(root, |_| None)
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(root: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Subprocesses run with the root as their working directory, so a
        // relative root would be applied twice.
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let dir = |key: &str, default: &str| {
            let path = PathBuf::from(get(key).unwrap_or_else(|| default.to_string()));
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };
        let exe = |key: &str, default: &str| {
            let name = get(key).unwrap_or_else(|| default.to_string());
            if EXE_SUFFIX.is_empty() || name.ends_with(EXE_SUFFIX) {
                name
            } else {
                format!("{}{}", name, EXE_SUFFIX)
            }
        };

        Self {
            root: root.clone(),
            asset_dir: dir("ASSET_DIR", DEFAULT_ASSET_DIR),
            build_dir: dir("BUILD_DIR", DEFAULT_BUILD_DIR),
            release_dir: dir("CARGO_TARGET_DIR", DEFAULT_TARGET_DIR).join("release"),
            cargo: get("CARGO").unwrap_or_else(|| "cargo".to_string()),
            extractor_bin: exe("EXTRACTOR_BIN", DEFAULT_EXTRACTOR_BIN),
            scrubber_bin: exe("SCRUBBER_BIN", DEFAULT_SCRUBBER_BIN),
            staged_extractor: exe("STAGED_EXTRACTOR", DEFAULT_STAGED_EXTRACTOR),
            strict_build: get("STRICT_BUILD").is_some_and(|v| is_truthy(&v)),
        }
    }

    /// Built extractor in the release directory.
    pub fn extractor_path(&self) -> PathBuf {
        self.release_dir.join(&self.extractor_bin)
    }

    /// Built scrubber in the release directory.
    pub fn scrubber_path(&self) -> PathBuf {
        self.release_dir.join(&self.scrubber_bin)
    }

    /// Extractor copy inside the asset tree.
    pub fn staged_extractor_path(&self) -> PathBuf {
        self.asset_dir.join(&self.staged_extractor)
    }

    pub fn info_path(&self) -> PathBuf {
        self.asset_dir.join(INFO_FILE)
    }

    pub fn graphics_dir(&self) -> PathBuf {
        self.asset_dir.join(GRAPHICS_DIR)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        let found = |p: &Path| if p.exists() { "FOUND" } else { "NOT FOUND" };

        println!("Configuration:");
        println!("  ROOT: {}", self.root.display());
        println!("  ASSET_DIR: {}", self.asset_dir.display());
        println!("  BUILD_DIR: {}", self.build_dir.display());
        println!("  RELEASE_DIR: {}", self.release_dir.display());
        println!("  CARGO: {}", self.cargo);
        println!(
            "  EXTRACTOR_BIN: {} ({})",
            self.extractor_bin,
            found(&self.extractor_path())
        );
        println!(
            "  SCRUBBER_BIN: {} ({})",
            self.scrubber_bin,
            found(&self.scrubber_path())
        );
        println!("  STAGED_EXTRACTOR: {}", self.staged_extractor);
        println!("  STRICT_BUILD: {}", self.strict_build);
        println!("  info.json: {}", found(&self.info_path()));
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
