//! Property tests for mcpcheck.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "same input, same output".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/validation.rs"]
mod validation;
