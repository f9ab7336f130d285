//! mcpcheck - pre-flight validator for multi-instance MCP server configs
//!
//! Checks a JSON document of named server instances (`mcpServers`) for
//! structural problems, cross-instance conflicts and risky or missing
//! environment settings before a runtime picks it up.

pub mod application;
pub mod config;
pub mod error;
pub mod validator;

// Re-exports for convenience
pub use application::{FileReport, RunObserver, RunSummary, ValidateUseCase};
pub use config::{Config, ConfigSource, LoadedConfig};
pub use error::{McpCheckError, McpCheckResult};
pub use validator::{
    validate, validate_str, validate_with_callback, validate_with_config, CheckEvent,
    CheckStatus, ValidationResult, ValidationSink,
};
