//! Static heuristics auditor for Godot projects.
//!
//! Walks a project tree and applies lexical pattern rules to GDScript
//! and scene/resource files, flagging three maintenance-risk patterns:
//! hard-coded node paths, signal connects in lifecycle functions, and
//! expensive operations inside per-frame callbacks. Heuristics only —
//! no parsing, no execution; review findings manually.

pub mod discovery;
pub mod error;
pub mod report;
pub mod rules;
pub mod scan;
pub mod types;

pub use error::{AuditError, Result};
pub use types::{AuditReport, AuditStats, Category, Finding};
