pub mod tree_table;
