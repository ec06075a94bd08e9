//! SHA-256 checksums for produced archives.
//!
//! The sidecar uses the `sha256sum` line format so it can be checked with
//! `sha256sum -c` from the build directory.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Stream a file through SHA-256 and return the lowercase hex digest.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to hash {}", path.display()))?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Path of the sidecar for an archive: `<archive>.sha256`.
pub fn sidecar_path(archive: &Path) -> PathBuf {
    let mut name = archive.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

/// Hash `archive` and write its sidecar. Returns the digest.
pub fn write_sidecar(archive: &Path) -> Result<String> {
    let hash = sha256_file(archive)?;
    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sidecar = sidecar_path(archive);
    fs::write(&sidecar, format!("{}  {}\n", hash, file_name))
        .with_context(|| format!("Failed to write {}", sidecar.display()))?;
    Ok(hash)
}

/// Read the digest stored in an archive's sidecar.
/// Returns None if there is no sidecar.
pub fn read_sidecar(archive: &Path) -> Option<String> {
    let sidecar = sidecar_path(archive);
    if !sidecar.exists() {
        return None;
    }
    match fs::read_to_string(&sidecar) {
        Ok(s) => s.split_whitespace().next().map(str::to_string),
        Err(e) => {
            eprintln!("  [WARN] Failed to read {}: {}", sidecar.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();

        assert_eq!(
            sha256_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sidecar_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("foo_1.2.3.zip");
        fs::write(&archive, b"PK\x05\x06").unwrap();

        let hash = write_sidecar(&archive).unwrap();
        let sidecar = dir.path().join("foo_1.2.3.zip.sha256");
        assert_eq!(sidecar_path(&archive), sidecar);

        let content = fs::read_to_string(&sidecar).unwrap();
        assert_eq!(content, format!("{}  foo_1.2.3.zip\n", hash));
        assert_eq!(read_sidecar(&archive), Some(hash));
    }

    #[test]
    fn test_read_sidecar_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_sidecar(&dir.path().join("none.zip")), None);
    }
}
