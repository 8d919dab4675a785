// src/discovery.rs
use crate::rules::BUILD_CACHE_DIR;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of one enumeration pass: paths (relative to the root) plus the
/// number of directory entries that could not be read. Walk errors are
/// never fatal; callers surface the count in verbose mode only.
pub struct Enumeration {
    pub paths: Vec<PathBuf>,
    pub error_count: usize,
}

/// Lists files under `root` whose extension is in `exts`.
///
/// Traversal is depth-first, directories top-down, entries sorted by file
/// name so enumeration order is a pure function of the tree. Hidden
/// directories and the build cache are pruned at the directory level:
/// a skipped directory's entire subtree is skipped.
#[must_use]
pub fn enumerate_files(root: &Path, exts: &[&str]) -> Enumeration {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_prune(e));

    let mut paths = Vec::new();
    let mut error_count = 0;

    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), exts) {
                    let p = entry.path().strip_prefix(root).unwrap_or(entry.path());
                    paths.push(p.to_path_buf());
                }
            }
            Err(_) => error_count += 1,
        }
    }

    Enumeration { paths, error_count }
}

// Exclusion is directory-level only: a skipped directory drops its whole
// subtree, but hidden *files* in a visible directory are still scanned.
// Depth 0 is the root itself; the root is never pruned even if its own
// name is hidden (scanning a checkout named ".work" must still work).
fn should_prune(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == BUILD_CACHE_DIR
}

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.contains(&e))
}

/// Reads a file as UTF-8 text, relative to the scan root.
///
/// Best-effort: any read or decoding failure yields `None` and the file
/// is skipped. Scanners only ever see readable text.
#[must_use]
pub fn read_text(root: &Path, rel: &Path) -> Option<String> {
    std::fs::read_to_string(root.join(rel)).ok()
}
