//! Scenario: Enterprise folder tree with mixed entity kinds
//!
//! Journey: An operator selects clusters in a folder tree where only some
//! kinds carry checkboxes and one cluster is read-only for them.
//!
//! Success Criteria:
//! - Kinds outside `checkable_kinds` render without a checkbox
//! - Restricted clusters never change state and still count for their parent
//! - `--kind` narrows the reported selection

use crate::common::*;

fn enterprise_env() -> TestEnv {
    let env = TestEnv::with_nodes(ENTERPRISE);
    env.write_file("treecascade.toml", FOLDERS_AND_CLUSTERS);
    env
}

/// SCENARIO: Ticking a folder skips the restricted cluster
#[test]
fn scenario_check_folder_skips_restricted_cluster() {
    let env = enterprise_env();

    let result = env.run(&["checked", "nodes.json", "check:east"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "root\neast\nc1\n");

    let result = env.run(&["checked", "nodes.json", "check:east", "--kind", "ssgCluster"]);
    assert_eq!(result.stdout, "c1\n");
}

/// SCENARIO: The rendered table shows disabled and absent checkboxes
#[test]
fn scenario_render_enterprise_table() {
    let env = enterprise_env();

    let result = env.run(&["apply", "nodes.json", "check:c1"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] [-] Enterprise
      [v] [-] East
        [v] [x] Cluster 1
                  Node 1
            [#] Cluster 2
      [v] [ ] West
            [ ] Cluster 3
    ");
}

/// SCENARIO: Clicking a node without a checkbox is rejected
#[test]
fn scenario_check_node_without_checkbox_fails() {
    let env = enterprise_env();

    let result = env.run(&["apply", "nodes.json", "check:n1"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("node 'n1' has no enabled checkbox"),
        "{}",
        result.stderr
    );
}

/// SCENARIO: A typo in the config file warns but does not fail
#[test]
fn scenario_config_typo_warns() {
    let env = TestEnv::with_nodes(CHAIN);
    env.write_file("treecascade.toml", "[output]\nindnet = 4\n");

    let result = env.run(&["show", "nodes.json"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("Unknown config key 'indnet'"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("Did you mean 'indent'?"), "{}", result.stderr);
}

/// SCENARIO: Invalid config values stop the run
#[test]
fn scenario_invalid_indent_fails() {
    let env = TestEnv::with_nodes(CHAIN);
    env.write_file("treecascade.toml", "[output]\nindent = 0\n");

    let result = env.run(&["show", "nodes.json"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid configuration"), "{}", result.stderr);
}
