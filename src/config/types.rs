//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Validation rules applied to every instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Recommended launcher commands; anything else is a warning
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,

    #[serde(default = "default_log_levels")]
    pub log_levels: Vec<String>,

    /// Substrings that mark an unfilled credential
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            commands: default_commands(),
            log_levels: default_log_levels(),
            placeholder_markers: default_placeholder_markers(),
        }
    }
}

fn default_commands() -> Vec<String> {
    ["npx", "node", "docker"].map(String::from).to_vec()
}

fn default_log_levels() -> Vec<String> {
    ["DEBUG", "INFO", "WARN", "ERROR"].map(String::from).to_vec()
}

fn default_placeholder_markers() -> Vec<String> {
    ["YOUR_", "_HERE"].map(String::from).to_vec()
}

/// Names of the `env` keys inspected inside each instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub token: String,
    pub username: String,
    pub password: String,
    pub passcode: String,
    pub url: String,
    pub log_file: String,
    pub log_level: String,
    pub elicitation: String,
    pub bulk_threshold: String,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            token: "API_TOKEN".to_string(),
            username: "USERNAME".to_string(),
            password: "PASSWORD".to_string(),
            passcode: "PASSCODE".to_string(),
            url: "BASE_URL".to_string(),
            log_file: "LOG_FILE".to_string(),
            log_level: "LOG_LEVEL".to_string(),
            elicitation: "ELICITATION_ENABLED".to_string(),
            bulk_threshold: "ELICITATION_BULK_THRESHOLD".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub fields: FieldsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Whether `command` is one of the recommended launchers
    pub fn is_recommended_command(&self, command: &str) -> bool {
        self.rules.commands.iter().any(|c| c == command)
    }

    pub fn is_valid_log_level(&self, level: &str) -> bool {
        self.rules.log_levels.iter().any(|l| l == level)
    }

    /// Whether `value` contains any placeholder marker (plain substring test)
    pub fn looks_like_placeholder(&self, value: &str) -> bool {
        self.rules
            .placeholder_markers
            .iter()
            .any(|marker| !marker.is_empty() && value.contains(marker.as_str()))
    }
}
