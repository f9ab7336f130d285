//! Common test utilities for mcpcheck CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory plus helpers to run the binary
//! - Fixtures: reusable configuration documents

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
