//! Common test utilities for treecascade integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp directory
//! - Fixtures: Reusable node record documents

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
