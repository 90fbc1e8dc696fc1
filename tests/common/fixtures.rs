//! Reusable node record documents.

/// A -> B -> C, every node checkable
pub const CHAIN: &str = r#"[
  {"id": "A", "parentId": null},
  {"id": "B", "parentId": "A"},
  {"id": "C", "parentId": "B"}
]"#;

/// A{B{C, D}, E}
pub const FORKED: &str = r#"[
  {"id": "A", "name": "Root"},
  {"id": "B", "parentId": "A", "name": "Branch"},
  {"id": "C", "parentId": "B", "name": "Leaf c"},
  {"id": "D", "parentId": "B", "name": "Leaf d"},
  {"id": "E", "parentId": "A", "name": "Leaf e"}
]"#;

/// Folder tree with mixed entity kinds and one restricted cluster
pub const ENTERPRISE: &str = r#"{"nodes": [
  {"id": "root", "type": "enterpriseFolder", "name": "Enterprise"},
  {"id": "east", "parentId": "root", "type": "folder", "name": "East"},
  {"id": "c1", "parentId": "east", "type": "ssgCluster", "name": "Cluster 1"},
  {"id": "n1", "parentId": "c1", "type": "ssgNode", "name": "Node 1"},
  {"id": "c2", "parentId": "east", "type": "ssgCluster", "name": "Cluster 2", "rbacCUD": false},
  {"id": "west", "parentId": "root", "type": "folder", "name": "West"},
  {"id": "c3", "parentId": "west", "type": "ssgCluster", "name": "Cluster 3"}
]}"#;

/// Config that gives checkboxes to folders and clusters only
pub const FOLDERS_AND_CLUSTERS: &str = r#"
[tree]
checkable_kinds = ["enterpriseFolder", "folder", "ssgCluster"]
"#;
