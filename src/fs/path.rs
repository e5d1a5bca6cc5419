//! Path resolution
//!
//! Pure path composition; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

/// Resolve a user-supplied token against a base directory.
///
/// `".."` maps to the parent of `base`; at the root, where there is no
/// parent, `base` is returned unchanged. Any other token is joined onto
/// `base` with the host's join semantics; embedded `.`/`..` components
/// are passed through, not normalized.
pub fn resolve(base: &Path, token: &str) -> PathBuf {
    if token == ".." {
        base.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base.to_path_buf())
    } else {
        base.join(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_name_joins() {
        assert_eq!(resolve(Path::new("/tmp/work"), "sub"), PathBuf::from("/tmp/work/sub"));
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve(Path::new("/tmp/work"), ".."), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_resolve_parent_at_root_is_noop() {
        assert_eq!(resolve(Path::new("/"), ".."), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_does_not_normalize_embedded_components() {
        assert_eq!(
            resolve(Path::new("/tmp/work"), "a/../b"),
            PathBuf::from("/tmp/work/a/../b")
        );
    }

    #[test]
    fn test_resolve_absolute_token_replaces_base() {
        // Host join semantics: an absolute token wins.
        assert_eq!(resolve(Path::new("/tmp/work"), "/etc"), PathBuf::from("/etc"));
    }
}
