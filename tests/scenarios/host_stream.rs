//! Scenario: Host consuming render intents
//!
//! Journey: A host UI pipes events in and applies the NDJSON intents it
//! receives, then reads the closing summary.
//!
//! Success Criteria:
//! - Load emits visibility, toggler and checkbox intents per row
//! - Each event emits only the intents for rows that changed
//! - The stream ends with a summary line

use crate::common::*;

/// SCENARIO: Streaming a leaf check
#[test]
fn scenario_stream_leaf_check() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["--json", "apply", "nodes.json", "check:C"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    assert_eq!(lines.len(), 13);

    // Load: three intents per row
    assert_eq!(lines[0]["event"], "row_visibility");
    assert_eq!(lines[1]["event"], "toggler");
    assert_eq!(lines[1]["state"], "expanded");
    assert_eq!(lines[8]["event"], "checkbox");
    assert_eq!(lines[8]["id"], "C");

    // Cascade: leaf first, then ancestors nearest first
    let ids: Vec<&str> = lines[9..12]
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["C", "B", "A"]);
    assert!(lines[9..12].iter().all(|l| l["state"] == "checked"));

    let summary = &lines[12];
    assert_eq!(summary["event"], "summary");
    assert_eq!(summary["events"], 1);
    assert_eq!(summary["checked"], serde_json::json!(["A", "B", "C"]));
}

/// SCENARIO: Collapse streams the toggler before hiding rows
#[test]
fn scenario_stream_collapse() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["apply", "nodes.json", "toggle:A", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines = result.json_lines();
    let events: Vec<serde_json::Value> = lines[9..lines.len() - 1].to_vec();

    assert_eq!(
        events,
        vec![
            serde_json::json!({"event": "toggler", "id": "A", "state": "collapsed"}),
            serde_json::json!({"event": "row_visibility", "id": "B", "visible": false}),
            serde_json::json!({"event": "row_visibility", "id": "C", "visible": false}),
        ]
    );
    assert_eq!(lines.last().unwrap()["visible"], 1);
}

/// SCENARIO: Validation reports the tree shape
#[test]
fn scenario_validate_reports_shape() {
    let env = TestEnv::with_nodes(FORKED);

    let result = env.run(&["validate", "nodes.json"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "[OK] 5 nodes, 1 root, max depth 2\n");

    let result = env.run(&["validate", "nodes.json", "--json"]);
    let lines = result.json_lines();
    assert_eq!(lines[0]["nodes"], 5);
    assert_eq!(lines[0]["max_depth"], 2);
}

/// SCENARIO: Malformed records fail fast
#[test]
fn scenario_validate_rejects_malformed_records() {
    let cases = [
        (
            r#"[{"id": "A"}, {"id": "A"}]"#,
            "duplicate node id 'A'",
        ),
        (
            r#"[{"id": "A", "parentId": "ghost"}]"#,
            "references missing parent 'ghost'",
        ),
        (
            r#"[{"id": "A", "parentId": "B"}, {"id": "B", "parentId": "A"}]"#,
            "forms a cycle",
        ),
    ];

    for (json, expected) in cases {
        let env = TestEnv::with_nodes(json);
        let result = env.run(&["validate", "nodes.json"]);
        assert!(!result.success, "should fail for {}", json);
        assert!(result.stderr.contains(expected), "{}", result.stderr);
    }
}
