// src/rules.rs
//! Pattern definitions for all three rule scanners, kept as data so new
//! risk tokens or path forms can be added without touching scan loops.
//!
//! These are heuristics: matching is lexical (line/substring based), so
//! false positives and negatives are possible by design.

use regex::Regex;
use std::sync::LazyLock;

/// Extensions treated as GDScript source.
pub const SCRIPT_EXTS: &[&str] = &["gd"];

/// Extensions treated as scene/resource descriptions.
pub const SCENE_EXTS: &[&str] = &["tscn", "tres"];

/// The Godot editor's build cache; its whole subtree is skipped.
pub const BUILD_CACHE_DIR: &str = ".godot";

/// `get_node("...")` / `get_node_or_null("...")` with a string-literal path.
pub static HARD_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(get_node|get_node_or_null)\(\s*"([^"]+)"\s*\)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Shorthand `$"Path/To/Node"` or bare `$Node` references.
/// Only the first match per line is reported.
pub static DOLLAR_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\$"([^"]+)"|\$([A-Za-z_][A-Za-z0-9_]*)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// `NodePath("...")` literals in scene/resource files.
pub static NODEPATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"NodePath\(\s*"([^"]+)"\s*\)"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Any function definition line; capture group 1 is the declared name.
pub static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*func\s+([A-Za-z0-9_]+)\s*\(").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Per-frame update function definitions.
pub static PROCESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*func\s+(_process|_physics_process)\s*\(")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Substring token used to detect signal subscriptions.
pub const CONNECT_TOKEN: &str = ".connect(";

/// Lifecycle functions where a `.connect(` call risks duplicate
/// subscriptions: they may run more than once per node lifetime.
pub const CONNECT_RISK_FUNCS: &[&str] = &[
    "_ready",
    "_enter_tree",
    "_process",
    "_physics_process",
    "on_spawn",
];

/// Operations that allocate, search, or format; individually cheap but
/// flagged when they run on every frame. Ordered: each token on a line
/// yields its own finding.
pub const PROCESS_RISK_TOKENS: &[(&str, &str)] = &[
    ("get_nodes_in_group", "group query each frame"),
    ("find_children", "scene tree search each frame"),
    ("instantiate(", "instantiate each frame"),
    ("queue_free(", "queue_free each frame"),
    ("format(", "string formatting each frame"),
    ("str(", "string conversion each frame"),
];

/// Returns true if the function name is a lifecycle entry point where
/// signal connects are a duplication risk.
#[must_use]
pub fn is_connect_risk_func(name: &str) -> bool {
    CONNECT_RISK_FUNCS.contains(&name)
}
