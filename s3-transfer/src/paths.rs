//! Key to local-path mapping for the folder mirror

use std::path::{Path, PathBuf};

/// Maps an object key to its local destination path
///
/// The key's leading `prefix` is stripped and the remainder is joined onto
/// `dest_root`, so the local tree mirrors the remote one relative to the
/// prefix. Returns `None` for keys that collapse to nothing after the strip
/// (folder placeholder objects), which have no file to write.
#[must_use]
pub fn local_path_for_key(dest_root: &Path, prefix: &str, key: &str) -> Option<PathBuf> {
    let relative = key.strip_prefix(prefix).unwrap_or(key);
    let relative = relative.trim_start_matches('/');

    if relative.is_empty() {
        return None;
    }

    Some(dest_root.join(relative))
}
