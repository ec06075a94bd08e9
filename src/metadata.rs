//! Mod metadata descriptor (`info.json`).
//!
//! Only `name` and `version` are required; they decide the archive file
//! name. The remaining Factorio descriptor fields are read for display.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed `info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub factorio_version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ModInfo {
    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mod metadata {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid mod metadata in {}", path.display()))
    }

    /// Parse descriptor JSON and check the fields used in file names.
    pub fn parse(json: &str) -> Result<Self> {
        let info: ModInfo = serde_json::from_str(json)?;
        check_file_component("name", &info.name)?;
        check_file_component("version", &info.version)?;
        Ok(info)
    }

    /// `<name>_<version>.zip`
    pub fn archive_name(&self) -> String {
        format!("{}_{}.zip", self.name, self.version)
    }

    /// Print the descriptor.
    pub fn print(&self) {
        println!("Mod metadata:");
        println!("  name: {}", self.name);
        println!("  version: {}", self.version);
        if let Some(title) = &self.title {
            println!("  title: {}", title);
        }
        if let Some(author) = &self.author {
            println!("  author: {}", author);
        }
        if let Some(factorio_version) = &self.factorio_version {
            println!("  factorio_version: {}", factorio_version);
        }
        if !self.dependencies.is_empty() {
            println!("  dependencies: {}", self.dependencies.join(", "));
        }
        println!("  archive: {}", self.archive_name());
    }
}

// The value ends up verbatim in the archive file name.
fn check_file_component(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        bail!("'{}' must not be empty", field);
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        bail!("'{}' must not contain path separators: {:?}", field, value);
    }
    Ok(())
}
