//! Recursive filename search
//!
//! Depth-first, pre-order traversal emitting matches as they are found.
//! Symlink cycles are not guarded against; a looping link tree will
//! recurse until the filesystem or the stack gives out.

use std::fs;
use std::path::Path;

/// Walk the subtree under `dir`, calling `on_match` with the absolute path
/// of every *file* whose name equals `filename` exactly (case-sensitive).
/// Directories are recursed into before their siblings and are never
/// reported themselves. A subdirectory that cannot be listed is treated
/// as empty.
pub fn search_file(dir: &Path, filename: &str, on_match: &mut dyn FnMut(&Path)) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "unreadable directory, skipping");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            search_file(&path, filename, on_match);
        } else if entry.file_name().to_string_lossy() == filename {
            tracing::trace!(path = %path.display(), "match");
            on_match(&path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn collect(root: &Path, name: &str) -> Vec<PathBuf> {
        let mut found = Vec::new();
        search_file(root, name, &mut |p| found.push(p.to_path_buf()));
        found
    }

    #[test]
    fn test_finds_file_in_subdirectory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/name.txt"), b"x").unwrap();
        fs::write(dir.path().join("name2.txt"), b"x").unwrap();

        let found = collect(dir.path(), "name.txt");
        assert_eq!(found, vec![dir.path().join("sub/name.txt")]);
    }

    #[test]
    fn test_exact_match_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("name.txt"), b"x").unwrap();
        fs::write(dir.path().join("name.txt.bak"), b"x").unwrap();
        fs::write(dir.path().join("Name.txt"), b"x").unwrap();

        let found = collect(dir.path(), "name.txt");
        assert_eq!(found, vec![dir.path().join("name.txt")]);
    }

    #[test]
    fn test_directories_never_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("a/b")).unwrap();

        assert!(collect(dir.path(), "b").is_empty());
    }

    #[test]
    fn test_multiple_matches_across_branches() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("x/deep")).unwrap();
        fs::create_dir(dir.path().join("y")).unwrap();
        fs::write(dir.path().join("x/deep/t.log"), b"1").unwrap();
        fs::write(dir.path().join("y/t.log"), b"2").unwrap();
        fs::write(dir.path().join("t.log"), b"3").unwrap();

        let found = collect(dir.path(), "t.log");
        assert_eq!(found.len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_treated_as_empty() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("target.txt"), b"x").unwrap();
        fs::write(dir.path().join("target.txt"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // running as root, the listing cannot be made to fail
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let found = collect(dir.path(), "target.txt");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(found, vec![dir.path().join("target.txt")]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(collect(dir.path(), "anything").is_empty());
    }
}
