//! Source file discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Enumerate `.cs` files under a project directory, recursively.
///
/// The returned paths are deduplicated and sorted so a run is deterministic
/// regardless of directory iteration order. A root that does not exist
/// yields an empty list, not an error.
pub fn collect_source_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext.eq_ignore_ascii_case("cs") && seen.insert(path.to_path_buf()) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
