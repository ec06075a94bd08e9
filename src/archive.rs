//! Zip packaging of the asset tree.
//!
//! Every file and directory below the tree root becomes one archive entry,
//! named by its path relative to the root with `/` separators. Entries are
//! written in file-name order so repeated runs produce the same entry list.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, Timelike};
use std::fs::{self, File, Metadata};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// What ended up in a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub files: usize,
    pub dirs: usize,
    /// Uncompressed size of all file entries.
    pub bytes: u64,
}

impl ArchiveSummary {
    pub fn entries(&self) -> usize {
        self.files + self.dirs
    }
}

/// Archive entry name for `path` below `root`.
///
/// Returns None for the root itself.
pub fn entry_name(root: &Path, path: &Path) -> Result<Option<String>> {
    let rel = path.strip_prefix(root).with_context(|| {
        format!("{} is not inside {}", path.display(), root.display())
    })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(s) => parts.push(s),
                None => bail!("Non UTF-8 path cannot be archived: {}", path.display()),
            },
            Component::CurDir => {}
            _ => bail!("Unexpected path component in {}", path.display()),
        }
    }

    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join("/")))
    }
}

/// Write every entry under `root` into a new zip at `output`.
///
/// Each visited path is printed to stdout, prefixed with the root's own
/// directory name. An existing file at `output` is replaced.
pub fn write_archive(root: &Path, output: &Path) -> Result<ArchiveSummary> {
    if !root.is_dir() {
        bail!("Asset tree not found: {}", root.display());
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create archive {}", output.display()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    // Compared against entries resolved the same way, so `..` and symlinks
    // can't hide the archive from itself.
    let canonical_output = fs::canonicalize(output)
        .with_context(|| format!("Failed to resolve {}", output.display()))?;
    let label = root.file_name().map(Path::new).unwrap_or(root);

    let mut summary = ArchiveSummary {
        path: output.to_path_buf(),
        files: 0,
        dirs: 0,
        bytes: 0,
    };

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();

        // The archive may live inside the tree it packages.
        if is_same_file(path, output, &canonical_output) {
            continue;
        }

        let Some(name) = entry_name(root, path)? else {
            continue;
        };
        println!("{}", label.join(&name).display());

        let meta = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let options = entry_options(&meta);

        if meta.is_dir() {
            zip.add_directory(name, options)
                .with_context(|| format!("Failed to add directory {}", path.display()))?;
            summary.dirs += 1;
        } else {
            zip.start_file(name, options)
                .with_context(|| format!("Failed to add file {}", path.display()))?;
            let mut src = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            summary.bytes += io::copy(&mut src, &mut zip)
                .with_context(|| format!("Failed to write {} into archive", path.display()))?;
            summary.files += 1;
        }
    }

    let mut inner = zip
        .finish()
        .with_context(|| format!("Failed to finalize archive {}", output.display()))?;
    inner.flush()?;

    Ok(summary)
}

fn is_same_file(path: &Path, output: &Path, canonical_output: &Path) -> bool {
    if path.file_name() != output.file_name() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| p == canonical_output)
}

fn entry_options(meta: &Metadata) -> SimpleFileOptions {
    let mut options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(meta.len() >= u32::MAX as u64);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(meta.permissions().mode() & 0o7777);
    }

    if let Some(mtime) = meta.modified().ok().and_then(zip_time) {
        options = options.last_modified_time(mtime);
    }
    options
}

// Zip stores local wall-clock time and cannot represent anything before 1980.
fn zip_time(time: std::time::SystemTime) -> Option<zip::DateTime> {
    let local = chrono::DateTime::<Local>::from(time);
    let year = u16::try_from(local.year()).ok()?;
    zip::DateTime::from_date_and_time(
        year,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .ok()
}

/// Open an existing archive for reading.
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open archive {}", path.display()))?;
    ZipArchive::new(file).with_context(|| format!("Not a valid zip archive: {}", path.display()))
}

/// Print an archive's entries with sizes.
pub fn print_entries(path: &Path) -> Result<()> {
    let mut zip = open_archive(path)?;

    println!("Contents of {}:", path.display());
    let mut total = 0u64;
    for i in 0..zip.len() {
        let entry = zip.by_index(i)?;
        total += entry.size();
        println!("  {:>10}  {}", entry.size(), entry.name());
    }
    let size = fs::metadata(path)?.len();
    println!(
        "\n{} entries, {} bytes uncompressed, {} bytes on disk",
        zip.len(),
        total,
        size
    );
    Ok(())
}
