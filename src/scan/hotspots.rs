// src/scan/hotspots.rs
//! Detects expensive operations inside per-frame update functions
//! (`_process` / `_physics_process`): group queries, tree searches,
//! instantiation, frees, and string formatting all allocate or search
//! on every frame.

use crate::rules::{PROCESS_RE, PROCESS_RISK_TOKENS};
use crate::types::{Category, Finding};
use std::path::Path;

/// Scans one script file's text.
///
/// Scope tracking is purely textual: a per-frame definition line enters
/// the scope (and is itself not scanned), and the next line starting a
/// top-level `func ` exits it. Nested inner functions or multi-line
/// statements can produce false scope boundaries; accepted for a
/// best-effort audit.
#[must_use]
pub fn scan_script(rel: &Path, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut inside_frame_update = false;

    for (i, line) in text.lines().enumerate() {
        if PROCESS_RE.is_match(line) {
            inside_frame_update = true;
            continue;
        }
        if inside_frame_update && line.starts_with("func ") {
            inside_frame_update = false;
        }
        if inside_frame_update {
            for (token, reason) in PROCESS_RISK_TOKENS {
                if line.contains(token) {
                    findings.push(Finding::new(
                        Category::ProcessRisk,
                        rel.to_path_buf(),
                        i + 1,
                        format!("{reason}: {}", line.trim()),
                    ));
                }
            }
        }
    }

    findings
}
