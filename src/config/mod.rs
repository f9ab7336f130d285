//! Configuration module for mcpcheck
//!
//! Resolution order:
//! 1. `--config <path>` (highest priority)
//! 2. Project config (`./mcpcheck.toml`)
//! 3. User config (`<config dir>/mcpcheck/config.toml`)
//! 4. Built-in defaults
//!
//! `MCPCHECK_*` environment variables then override output settings only.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, suggest, EnvVarValidator};
pub use loader::{
    resolve, ConfigSource, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE, USER_CONFIG_ENV,
};
pub use types::{ColorMode, Config, FieldsConfig, OutputConfig, RulesConfig};
