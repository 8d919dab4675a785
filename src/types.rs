// src/types.rs
//! Core types for the audit system.
//!
//! Every rule produces the same record shape: a category, a source
//! location, and a human-readable detail string. Findings are created
//! during a scan pass and read-only afterward.

use serde::Serialize;
use std::path::PathBuf;

/// The fixed set of finding categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "hard_path")]
    HardPath,
    #[serde(rename = "nodepath")]
    NodePath,
    #[serde(rename = "connect_risk")]
    ConnectRisk,
    #[serde(rename = "process_risk")]
    ProcessRisk,
}

impl Category {
    /// All categories in the order the report renders them.
    pub const ALL: [Category; 4] = [
        Self::HardPath,
        Self::NodePath,
        Self::ConnectRisk,
        Self::ProcessRisk,
    ];

    /// Returns the label used in report headers and finding lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::HardPath => "hard_path",
            Self::NodePath => "nodepath",
            Self::ConnectRisk => "connect_risk",
            Self::ProcessRisk => "process_risk",
        }
    }
}

/// One reported instance of a heuristic rule match.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Which rule family produced this finding.
    pub category: Category,
    /// File path, relative to the scan root.
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Rule-specific description.
    pub detail: String,
}

impl Finding {
    #[must_use]
    pub fn new(category: Category, path: PathBuf, line: usize, detail: String) -> Self {
        Self {
            category,
            path,
            line,
            detail,
        }
    }
}

/// The complete audit result: all findings plus summary statistics.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    /// Findings in collection order (hard-path pass, connect pass,
    /// hotspot pass; file order then line order within each).
    pub findings: Vec<Finding>,
    pub stats: AuditStats,
}

/// Summary statistics from the audit. Diagnostic only; never part of
/// the rendered report text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditStats {
    /// Script files enumerated (`.gd`).
    pub script_files: usize,
    /// Scene/resource files enumerated (`.tscn`, `.tres`).
    pub scene_files: usize,
    /// Directory entries that could not be read during the walks.
    pub walk_errors: usize,
    /// Scan duration in milliseconds.
    pub duration_ms: u128,
}
