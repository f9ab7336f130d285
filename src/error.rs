//! Error types for mcpcheck
//!
//! Uses `thiserror` for library errors. The load failures double as the
//! single message reported when a file cannot be checked at all.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mcpcheck operations
pub type McpCheckResult<T> = Result<T, McpCheckError>;

/// Main error type for mcpcheck operations
#[derive(Error, Debug)]
pub enum McpCheckError {
    /// Configuration file is missing or unreadable
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration file is not valid JSON
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Document root has no `mcpServers` field
    #[error("missing required field 'mcpServers' at document root")]
    MissingServers,

    /// `mcpServers` exists but is not an object
    #[error("'mcpServers' must be an object mapping instance names to configurations")]
    ServersNotObject,

    /// Invalid tool configuration (mcpcheck.toml)
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
