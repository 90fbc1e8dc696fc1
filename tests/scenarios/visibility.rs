//! Scenario: Expand and collapse
//!
//! Journey: A user folds parts of the tree away and opens them again.
//!
//! Success Criteria:
//! - Collapsing hides every transitive descendant
//! - Re-expanding only reveals rows whose ancestors are all expanded
//! - Bulk expand/collapse behave like the toolbar buttons

use crate::common::*;

/// SCENARIO: Collapsed inner node stays collapsed when its parent reopens
#[test]
fn scenario_reexpand_keeps_inner_collapse() {
    let env = TestEnv::with_nodes(CHAIN);

    let result = env.run(&["apply", "nodes.json", "toggle:A"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "[>] [ ] A\n");

    let result = env.run(&["apply", "nodes.json", "toggle:A", "toggle:B", "toggle:A"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "[v] [ ] A\n  [>] [ ] B\n");
}

/// SCENARIO: Toggling a leaf changes nothing
#[test]
fn scenario_toggle_leaf_is_noop() {
    let env = TestEnv::with_nodes(CHAIN);

    let before = env.run(&["show", "nodes.json"]);
    let after = env.run(&["apply", "nodes.json", "toggle:C"]);

    assert!(after.success, "{}", after.combined_output());
    assert_eq!(before.stdout, after.stdout);
}

/// SCENARIO: Collapse all on a single-root tree keeps the first level in view
#[test]
fn scenario_collapse_all_single_root() {
    let env = TestEnv::with_nodes(FORKED);

    let result = env.run(&["apply", "nodes.json", "collapse-all"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        result.stdout,
        "[v] [ ] Root\n  [>] [ ] Branch\n      [ ] Leaf e\n"
    );

    let result = env.run(&["apply", "nodes.json", "collapse-all", "expand-all"]);
    assert_eq!(result.stdout.lines().count(), 5);
}

/// SCENARIO: Configured initial collapse applies at load
#[test]
fn scenario_initially_collapsed_from_env() {
    let env = TestEnv::with_nodes(FORKED);

    let result = env.run_with_env(
        &["show", "nodes.json"],
        &[("TREECASCADE_INITIALLY_COLLAPSED", "true")],
    );

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout.lines().count(), 3);
}
