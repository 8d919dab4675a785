// src/scan/connect.rs
//! Detects signal subscriptions placed in lifecycle functions that may
//! run repeatedly (`_ready` on re-entry, `_process` every frame, ...),
//! where a `.connect(` call risks duplicate subscriptions and leaked
//! handlers.

use crate::rules::{is_connect_risk_func, CONNECT_TOKEN, FUNC_RE};
use crate::types::{Category, Finding};
use std::path::Path;

/// Scans one script file's text.
///
/// Tracks only the most recently declared function name, with no
/// block/indentation nesting awareness; the state is file-local. A
/// `.connect(` call before any function definition never flags.
#[must_use]
pub fn scan_script(rel: &Path, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut current_func: Option<String> = None;

    for (i, line) in text.lines().enumerate() {
        if let Some(caps) = FUNC_RE.captures(line) {
            current_func = Some(caps[1].to_string());
        }

        let in_risk_func = current_func
            .as_deref()
            .is_some_and(is_connect_risk_func);

        if in_risk_func && line.contains(CONNECT_TOKEN) {
            // current_func is Some here; in_risk_func proved it.
            let name = current_func.as_deref().unwrap_or_default();
            findings.push(Finding::new(
                Category::ConnectRisk,
                rel.to_path_buf(),
                i + 1,
                format!("event subscription inside {name}"),
            ));
        }
    }

    findings
}
