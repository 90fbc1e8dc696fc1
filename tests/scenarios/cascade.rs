//! Scenario: Tri-state checkbox cascade on a chain
//!
//! Journey: A user ticks and clears boxes in a three-level chain A -> B -> C.
//!
//! Success Criteria:
//! - Ticking a leaf fills every ancestor whose children are all ticked
//! - Clearing a node recomputes ancestors from their children
//! - A parent with a ticked and a cleared child shows mixed

use crate::common::*;

fn checked_ids(result: &TestResult) -> Vec<String> {
    result.stdout.lines().map(str::to_string).collect()
}

/// SCENARIO: Ticking the leaf of a chain ticks the whole chain
#[test]
fn scenario_check_leaf_fills_chain() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["checked", "nodes.json", "check:C"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(checked_ids(&result), vec!["A", "B", "C"]);

    let result = env.run(&["apply", "nodes.json", "check:C"]);
    assert_eq!(result.stdout, "[v] [x] A\n  [v] [x] B\n        [x] C\n");
}

/// SCENARIO: Clearing the only child clears every ancestor
///
/// B's sole child is cleared, so B aggregates to unchecked, and so does A.
#[test]
fn scenario_uncheck_only_child_clears_chain() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["apply", "nodes.json", "check:B", "uncheck:C"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "[v] [ ] A\n  [v] [ ] B\n        [ ] C\n");
}

/// SCENARIO: Clearing one of two ticked siblings leaves the parent mixed
#[test]
fn scenario_uncheck_one_sibling_is_mixed() {
    let env = TestEnv::with_nodes(FORKED);

    let result = env.run(&["apply", "nodes.json", "check:B", "uncheck:C"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] [-] Root
      [v] [-] Branch
            [ ] Leaf c
            [x] Leaf d
          [ ] Leaf e
    ");

    let result = env.run(&["checked", "nodes.json", "check:B", "uncheck:C"]);
    assert_eq!(checked_ids(&result), vec!["A", "B", "D"]);
}

/// SCENARIO: Re-ticking the mixed parent fills its subtree again
#[test]
fn scenario_check_mixed_parent_fills_subtree() {
    let env = TestEnv::with_nodes(FORKED);

    let result = env.run(&["checked", "nodes.json", "check:B", "uncheck:C", "check:A"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(checked_ids(&result), vec!["A", "B", "C", "D", "E"]);
}

/// SCENARIO: Events naming unknown nodes fail with a clear message
#[test]
fn scenario_unknown_node_fails() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["apply", "nodes.json", "check:C", "check:Z"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("event 2 ('check:Z') failed"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("unknown node 'Z'"), "{}", result.stderr);
}
