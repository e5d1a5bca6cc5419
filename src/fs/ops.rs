//! Filesystem operations
//!
//! Thin per-call surface over the host filesystem. No batching, no
//! caching; every call observes the filesystem as it is right now.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use super::FileEntry;

/// Read directory contents and return a list of FileEntry
pub fn read_directory(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        match FileEntry::from_path(&entry.path()) {
            Ok(file_entry) => entries.push(file_entry),
            Err(err) => {
                // Skip entries we can't stat (permission denied, races)
                tracing::debug!(path = %entry.path().display(), %err, "skipping unreadable entry");
            }
        }
    }

    Ok(entries)
}

/// Create a single directory. The caller is expected to have checked for
/// an existing entry at this path first.
pub fn create_directory(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}

/// Delete a file or an empty directory. The caller refuses non-empty
/// directories before getting here, so no recursive removal.
pub fn delete_entry(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// True if `path` is a directory with no entries.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Rename/move an entry. Overwrite confirmation happens at the caller;
/// once called, the rename is unconditional.
pub fn rename_entry(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

/// Byte-for-byte file copy, preserving the source modification time.
/// `fs::copy` opens and closes both handles internally, so nothing leaks
/// on error paths.
pub fn copy_bytes(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    if let Ok(meta) = fs::metadata(from) {
        if let Ok(mtime) = meta.modified() {
            let _ = filetime::set_file_mtime(to, filetime::FileTime::from_system_time(mtime));
        }
    }
    Ok(())
}

/// Size and last-modified time of an entry.
pub fn read_metadata(path: &Path) -> io::Result<(u64, Option<SystemTime>)> {
    let meta = fs::metadata(path)?;
    let size = if meta.is_dir() { 0 } else { meta.len() };
    Ok((size, meta.modified().ok()))
}
