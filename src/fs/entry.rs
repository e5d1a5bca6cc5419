//! File entry representation

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single file or directory entry, read fresh from the filesystem on
/// every listing or info request. Nothing is cached.
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct FileEntry {
    /// File/directory name (not full path)
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    /// Whether this is a directory
    pub is_dir: bool,
    /// File size in bytes (0 for directories)
    pub size: u64,
    /// Last modification time
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    /// Create a FileEntry from a path
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let is_dir = metadata.is_dir();
        let size = if is_dir { 0 } else { metadata.len() };

        Ok(Self {
            name,
            path: path.to_path_buf(),
            is_dir,
            size,
            modified: metadata.modified().ok(),
        })
    }
}
