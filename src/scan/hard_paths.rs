// src/scan/hard_paths.rs
//! Detects brittle scene-tree references expressed as literal path
//! strings: `get_node("...")` calls, `$` shorthand references in scripts,
//! and `NodePath("...")` literals in scene/resource files.

use crate::rules::{DOLLAR_PATH_RE, HARD_PATH_RE, NODEPATH_RE};
use crate::types::{Category, Finding};
use std::path::Path;

/// Scans one script file's text. Stateless: every line is checked
/// independently, and a line may produce several findings.
#[must_use]
pub fn scan_script(rel: &Path, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;

        // Every call-form match on the line counts.
        for caps in HARD_PATH_RE.captures_iter(line) {
            findings.push(Finding::new(
                Category::HardPath,
                rel.to_path_buf(),
                line_no,
                format!("{}(\"{}\")", &caps[1], &caps[2]),
            ));
        }

        // Shorthand references: first match per line only.
        if let Some(caps) = DOLLAR_PATH_RE.captures(line) {
            let target = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            findings.push(Finding::new(
                Category::HardPath,
                rel.to_path_buf(),
                line_no,
                format!("shorthand reference -> {target}"),
            ));
        }
    }

    findings
}

/// Scans one scene/resource file's text for `NodePath` literals.
/// First match per line only.
#[must_use]
pub fn scan_scene(rel: &Path, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if let Some(caps) = NODEPATH_RE.captures(line) {
            findings.push(Finding::new(
                Category::NodePath,
                rel.to_path_buf(),
                i + 1,
                format!("NodePath(\"{}\")", &caps[1]),
            ));
        }
    }

    findings
}
