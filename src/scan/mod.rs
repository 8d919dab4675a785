// src/scan/mod.rs
//! The rule-scanning engine: three independent passes over the project
//! tree, each re-enumerating its own file set and sharing no mutable
//! state with the others. All dependencies between passes flow through
//! the finding list.

pub mod connect;
pub mod hard_paths;
pub mod hotspots;

use crate::discovery::{enumerate_files, read_text, Enumeration};
use crate::rules::{SCENE_EXTS, SCRIPT_EXTS};
use crate::types::{AuditReport, AuditStats, Finding};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// Runs the full audit over `root`.
///
/// A missing or empty root is not an error: it yields zero findings in
/// every category. Unreadable files are skipped silently.
#[must_use]
pub fn run(root: &Path) -> AuditReport {
    let start = Instant::now();

    let scripts = enumerate_files(root, SCRIPT_EXTS);
    let scenes = enumerate_files(root, SCENE_EXTS);

    let mut findings = Vec::new();
    findings.extend(scan_hard_paths(root));
    findings.extend(scan_connect_risks(root));
    findings.extend(scan_process_hotspots(root));

    let stats = AuditStats {
        script_files: scripts.paths.len(),
        scene_files: scenes.paths.len(),
        walk_errors: scripts.error_count + scenes.error_count,
        duration_ms: start.elapsed().as_millis(),
    };

    AuditReport { findings, stats }
}

/// Hard-path pass: literal node references in scripts, `NodePath`
/// literals in scene/resource files.
#[must_use]
pub fn scan_hard_paths(root: &Path) -> Vec<Finding> {
    let mut findings = scan_files(
        root,
        enumerate_files(root, SCRIPT_EXTS),
        hard_paths::scan_script,
    );
    findings.extend(scan_files(
        root,
        enumerate_files(root, SCENE_EXTS),
        hard_paths::scan_scene,
    ));
    findings
}

/// Connect-risk pass: `.connect(` calls inside lifecycle functions.
#[must_use]
pub fn scan_connect_risks(root: &Path) -> Vec<Finding> {
    scan_files(root, enumerate_files(root, SCRIPT_EXTS), connect::scan_script)
}

/// Process-hotspot pass: risky tokens inside per-frame callbacks.
#[must_use]
pub fn scan_process_hotspots(root: &Path) -> Vec<Finding> {
    scan_files(root, enumerate_files(root, SCRIPT_EXTS), hotspots::scan_script)
}

// Per-file scans are independent, so files fan out across the rayon
// pool; ordered collection keeps findings in enumeration order and the
// report deterministic.
fn scan_files<F>(root: &Path, enumeration: Enumeration, scan: F) -> Vec<Finding>
where
    F: Fn(&Path, &str) -> Vec<Finding> + Sync,
{
    enumeration
        .paths
        .par_iter()
        .filter_map(|rel| read_text(root, rel).map(|text| scan(rel.as_path(), &text)))
        .flatten()
        .collect()
}
