// src/report.rs
//! Deterministic report rendering.
//!
//! Given identical findings the text output is byte-identical: categories
//! render in a fixed order, findings within a category keep collection
//! order, and the output ends with exactly one trailing newline.

use crate::error::{AuditError, Result};
use crate::types::{Category, Finding};
use std::fmt::Write;
use std::path::Path;

/// Formats the findings as the canonical text report.
///
/// Every category prints a `name: count` header even when empty.
#[must_use]
pub fn format_text(root: &Path, findings: &[Finding]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Godot Audit Report");
    let _ = writeln!(out, "Root: {}", root.display());
    let _ = writeln!(out);

    for category in Category::ALL {
        let items: Vec<&Finding> = findings.iter().filter(|f| f.category == category).collect();
        let _ = writeln!(out, "{}: {}", category.label(), items.len());
        for f in items {
            let _ = writeln!(
                out,
                "  [{}] {}:{} -> {}",
                f.category.label(),
                f.path.display(),
                f.line,
                f.detail
            );
        }
        let _ = writeln!(out);
    }

    // Collapse trailing blank lines to a single final newline.
    let trimmed = out.trim_end();
    format!("{trimmed}\n")
}

/// Formats the findings as JSON for machine consumption.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json(findings: &[Finding]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(findings)?;
    out.push('\n');
    Ok(out)
}

/// Writes the rendered report to `path`.
///
/// This is the one failure the engine surfaces to the driver: the report
/// string itself is always produced, and how to present a write failure
/// is the caller's decision.
///
/// # Errors
/// Returns `AuditError::Io` with the offending path if the write fails.
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered).map_err(|source| AuditError::Io {
        source,
        path: path.to_path_buf(),
    })
}
