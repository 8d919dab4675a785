// tests/unit_scanners.rs
use gdaudit_core::scan::{connect, hard_paths, hotspots};
use gdaudit_core::Category;
use std::path::Path;

fn rel() -> &'static Path {
    Path::new("player.gd")
}

// --- Hard-path scanner ---

#[test]
fn test_get_node_call_forms() {
    let text = r#"var a = get_node("UI/Health")
var b = get_node_or_null("World/Spawner")
"#;
    let findings = hard_paths::scan_script(rel(), text);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].category, Category::HardPath);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].detail, "get_node(\"UI/Health\")");
    assert_eq!(findings[1].detail, "get_node_or_null(\"World/Spawner\")");
}

#[test]
fn test_every_call_match_on_a_line_counts() {
    let text = r#"if get_node("A") and get_node("B"): pass
"#;
    let findings = hard_paths::scan_script(rel(), text);
    assert_eq!(findings.len(), 2, "one finding per call match");
    assert!(findings[0].detail.contains("A"));
    assert!(findings[1].detail.contains("B"));
}

#[test]
fn test_call_with_whitespace_inside_parens() {
    let findings = hard_paths::scan_script(rel(), "get_node( \"Player\" )\n");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].detail, "get_node(\"Player\")");
}

#[test]
fn test_shorthand_quoted_and_bare() {
    let findings = hard_paths::scan_script(rel(), "var s = $\"UI/Score\"\nvar h = $Health\n");
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].detail, "shorthand reference -> UI/Score");
    assert_eq!(findings[1].detail, "shorthand reference -> Health");
}

#[test]
fn test_shorthand_first_match_only() {
    // Both a quoted and a bare reference on one line: one finding.
    let findings = hard_paths::scan_script(rel(), "var x = $\"UI/Bar\" if flag else $Fallback\n");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].detail, "shorthand reference -> UI/Bar");
}

#[test]
fn test_call_and_shorthand_on_same_line_both_flag() {
    let findings = hard_paths::scan_script(rel(), "var x = get_node(\"A\") or $B\n");
    assert_eq!(findings.len(), 2);
}

#[test]
fn test_nodepath_literal_in_scene() {
    let scene = Path::new("level.tscn");
    let text = "target = NodePath(\"Enemies/Boss\")\nplain = \"no path here\"\n";
    let findings = hard_paths::scan_scene(scene, text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::NodePath);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].detail, "NodePath(\"Enemies/Boss\")");
}

#[test]
fn test_nodepath_first_match_per_line() {
    let scene = Path::new("level.tscn");
    let findings =
        hard_paths::scan_scene(scene, "a = NodePath(\"X\") b = NodePath(\"Y\")\n");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].detail, "NodePath(\"X\")");
}

// --- Connect-risk scanner ---

#[test]
fn test_connect_inside_ready_flags() {
    let text = "func _ready():\n\ttimer.timeout.connect(_on_timeout)\n";
    let findings = connect::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::ConnectRisk);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].detail, "event subscription inside _ready");
}

#[test]
fn test_connect_inside_non_risk_func_is_clean() {
    let text = "func setup_once():\n\ttimer.timeout.connect(_on_timeout)\n";
    let findings = connect::scan_script(rel(), text);
    assert!(findings.is_empty());
}

#[test]
fn test_connect_before_any_func_is_clean() {
    // No function definition yet: the tracked name is unset.
    let text = "var sig = body.entered.connect(_on_entered)\n";
    let findings = connect::scan_script(rel(), text);
    assert!(findings.is_empty());
}

#[test]
fn test_state_follows_most_recent_definition() {
    let text = concat!(
        "func _ready():\n",
        "\tpass\n",
        "func helper():\n",
        "\tx.connect(y)\n",
        "func _enter_tree():\n",
        "\tz.connect(w)\n",
    );
    let findings = connect::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 6);
    assert_eq!(findings[0].detail, "event subscription inside _enter_tree");
}

#[test]
fn test_all_risk_functions_flag() {
    for name in ["_ready", "_enter_tree", "_process", "_physics_process", "on_spawn"] {
        let text = format!("func {name}(arg):\n\tx.connect(y)\n");
        let findings = connect::scan_script(rel(), &text);
        assert_eq!(findings.len(), 1, "{name} should flag");
        assert_eq!(findings[0].detail, format!("event subscription inside {name}"));
    }
}

// --- Process-hotspot scanner ---

#[test]
fn test_instantiate_inside_process_flags() {
    let text = "func _process(delta):\n\tvar e = bullet_scene.instantiate()\n";
    let findings = hotspots::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::ProcessRisk);
    assert_eq!(findings[0].line, 2);
    assert!(findings[0].detail.starts_with("instantiate each frame:"));
    assert!(findings[0].detail.ends_with("var e = bullet_scene.instantiate()"));
}

#[test]
fn test_token_outside_frame_update_is_clean() {
    let text = "func shoot():\n\tvar e = bullet_scene.instantiate()\n";
    let findings = hotspots::scan_script(rel(), text);
    assert!(findings.is_empty());
}

#[test]
fn test_next_func_line_ends_scope() {
    let text = concat!(
        "func _process(delta):\n",
        "\tget_nodes_in_group(\"enemies\")\n",
        "func idle():\n",
        "\tget_nodes_in_group(\"enemies\")\n",
    );
    let findings = hotspots::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
    assert_eq!(
        findings[0].detail,
        "group query each frame: get_nodes_in_group(\"enemies\")"
    );
}

#[test]
fn test_definition_line_itself_not_scanned() {
    // Token on the _process definition line does not flag; scanning
    // starts on the next line.
    let text = "func _process(delta): queue_free()\n";
    let findings = hotspots::scan_script(rel(), text);
    assert!(findings.is_empty());
}

#[test]
fn test_physics_process_also_tracked() {
    let text = "func _physics_process(delta):\n\tfind_children(\"*\")\n";
    let findings = hotspots::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].detail.starts_with("scene tree search each frame:"));
}

#[test]
fn test_multiple_tokens_on_one_line() {
    let text = "func _process(delta):\n\tlabel.text = str(count).format({})\n";
    let findings = hotspots::scan_script(rel(), text);
    assert_eq!(findings.len(), 2, "each token yields its own finding");
    assert!(findings[0].detail.starts_with("string formatting each frame:"));
    assert!(findings[1].detail.starts_with("string conversion each frame:"));
}

#[test]
fn test_scope_persists_across_plain_lines() {
    let text = concat!(
        "func _process(delta):\n",
        "\tif cooldown > 0:\n",
        "\t\tcooldown -= delta\n",
        "\tvar label_text = str(score)\n",
    );
    let findings = hotspots::scan_script(rel(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 4);
}
