//! Configuration loading and source resolution

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{McpCheckError, McpCheckResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "mcpcheck.toml";

/// Overrides the user config location (used by tests and unusual setups)
pub const USER_CONFIG_ENV: &str = "MCPCHECK_USER_CONFIG_PATH";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => write!(f, "built-in defaults"),
        }
    }
}

/// Resolved configuration plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> McpCheckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| McpCheckError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// Order: explicit path, `./mcpcheck.toml`, user config, defaults. The first
/// file found is used as-is; files are not merged.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> McpCheckResult<LoadedConfig> {
    let candidate = if let Some(path) = explicit {
        if !path.is_file() {
            return Err(McpCheckError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(ConfigSource::Explicit(path.to_path_buf()))
    } else {
        let project = cwd.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            Some(ConfigSource::Project(project))
        } else {
            user_config_path()
                .filter(|p| p.is_file())
                .map(ConfigSource::User)
        }
    };

    let source = candidate.unwrap_or(ConfigSource::Defaults);
    let (config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (MCPCHECK_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(color) = get_env("MCPCHECK_COLOR") {
        let validator = EnvVarValidator::new("MCPCHECK_COLOR", &["auto", "always", "never"]);
        config.output.color = validator.parse(&color, parse_color_mode, config.output.color);
    }

    if let Some(unicode) = get_env("MCPCHECK_UNICODE") {
        config.output.unicode = unicode.to_lowercase() != "false" && unicode != "0";
    }

    config
}

fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(USER_CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("mcpcheck").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "rules",
        "commands",
        "log_levels",
        "placeholder_markers",
        "fields",
        "token",
        "username",
        "password",
        "passcode",
        "url",
        "log_file",
        "log_level",
        "elicitation",
        "bulk_threshold",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
