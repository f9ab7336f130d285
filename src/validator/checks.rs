//! Per-instance checks
//!
//! Every check reports at most one warning or error. Checks never stop the
//! remaining checks for the instance or for later instances.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use url::Url;

use crate::config::{suggest, Config};

use super::document::InstanceView;
use super::report::ValidationSink;

/// Cross-instance state for one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Trackers<'a> {
    names: HashSet<&'a str>,
    /// log file path -> instance that claimed it first
    log_files: HashMap<&'a str, &'a str>,
}

pub(crate) fn check_instance<'a>(
    name: &'a str,
    value: &'a Value,
    config: &Config,
    trackers: &mut Trackers<'a>,
    sink: &mut impl ValidationSink,
) {
    let view = InstanceView::new(value);

    check_name(name, trackers, sink);
    check_command(name, &view, config, sink);
    check_args(name, &view, sink);
    check_auth(name, &view, config, sink);
    check_url(name, &view, config, sink);
    check_log_file(name, &view, config, trackers, sink);
    check_log_level(name, &view, config, sink);
    check_elicitation(name, &view, config, sink);
}

fn check_name<'a>(name: &'a str, trackers: &mut Trackers<'a>, sink: &mut impl ValidationSink) {
    if trackers.names.insert(name) {
        sink.add_pass(Some(name), "name", "unique");
    } else {
        sink.add_error(
            Some(name),
            "name",
            &format!("{}: duplicate instance name", name),
        );
    }
}

fn check_command(
    name: &str,
    view: &InstanceView<'_>,
    config: &Config,
    sink: &mut impl ValidationSink,
) {
    match view.field("command") {
        None | Some(Value::Null) => {
            sink.add_error(
                Some(name),
                "command",
                &format!("{}: missing required field 'command'", name),
            );
        }
        Some(Value::String(command)) if config.is_recommended_command(command) => {
            sink.add_pass(Some(name), "command", command);
        }
        Some(Value::String(command)) => {
            sink.add_warning(
                Some(name),
                "command",
                &format!(
                    "{}: unusual command '{}' (recommended: {})",
                    name,
                    command,
                    config.rules.commands.join(", ")
                ),
            );
        }
        Some(_) => {
            sink.add_error(
                Some(name),
                "command",
                &format!("{}: 'command' must be a string", name),
            );
        }
    }
}

fn check_args(name: &str, view: &InstanceView<'_>, sink: &mut impl ValidationSink) {
    match view.field("args") {
        Some(Value::Array(args)) => {
            sink.add_pass(Some(name), "args", &format!("{} argument(s)", args.len()));
        }
        Some(_) => {
            sink.add_error(
                Some(name),
                "args",
                &format!("{}: 'args' must be an array", name),
            );
        }
        None => {
            sink.add_error(
                Some(name),
                "args",
                &format!("{}: missing required field 'args' (array)", name),
            );
        }
    }
}

fn check_auth(
    name: &str,
    view: &InstanceView<'_>,
    config: &Config,
    sink: &mut impl ValidationSink,
) {
    let fields = &config.fields;
    let token = view.env_str(&fields.token);
    let basic =
        view.env_str(&fields.username).is_some() && view.env_str(&fields.password).is_some();
    let passcode = view.env_str(&fields.passcode).is_some();

    if token.is_none() && !basic && !passcode {
        sink.add_error(
            Some(name),
            "auth",
            &format!(
                "{}: no authentication configured (set {}, {} + {}, or {})",
                name, fields.token, fields.username, fields.password, fields.passcode
            ),
        );
        return;
    }

    match token {
        Some(token) if config.looks_like_placeholder(token) => {
            sink.add_warning(
                Some(name),
                "auth",
                &format!(
                    "{}: {} looks like a placeholder value; replace it with a real token",
                    name, fields.token
                ),
            );
        }
        Some(_) => sink.add_pass(Some(name), "auth", &fields.token),
        None if basic => sink.add_pass(
            Some(name),
            "auth",
            &format!("{} + {}", fields.username, fields.password),
        ),
        None => sink.add_pass(Some(name), "auth", &fields.passcode),
    }
}

fn check_url(
    name: &str,
    view: &InstanceView<'_>,
    config: &Config,
    sink: &mut impl ValidationSink,
) {
    let key = &config.fields.url;
    let Some(raw) = view.env_str(key) else {
        return;
    };

    match Url::parse(raw) {
        Ok(_) => sink.add_pass(Some(name), "url", raw),
        Err(e) => sink.add_error(
            Some(name),
            "url",
            &format!("{}: invalid {} '{}': {}", name, key, raw, e),
        ),
    }
}

fn check_log_file<'a>(
    name: &'a str,
    view: &InstanceView<'a>,
    config: &Config,
    trackers: &mut Trackers<'a>,
    sink: &mut impl ValidationSink,
) {
    let key = &config.fields.log_file;
    let Some(path) = view.env_str(key) else {
        sink.add_warning(
            Some(name),
            "log_file",
            &format!("{}: {} not set; logs will go to stderr", name, key),
        );
        return;
    };

    match trackers.log_files.get(path).copied() {
        Some(owner) => sink.add_error(
            Some(name),
            "log_file",
            &format!(
                "{}: duplicate {} '{}' (already used by '{}')",
                name, key, path, owner
            ),
        ),
        None => {
            trackers.log_files.insert(path, name);
            sink.add_pass(Some(name), "log_file", path);
        }
    }
}

fn check_log_level(
    name: &str,
    view: &InstanceView<'_>,
    config: &Config,
    sink: &mut impl ValidationSink,
) {
    let key = &config.fields.log_level;
    let levels = &config.rules.log_levels;

    let Some(level) = view.env_str(key) else {
        let default = levels.first().map(String::as_str).unwrap_or("DEBUG");
        sink.add_warning(
            Some(name),
            "log_level",
            &format!("{}: {} not set; defaults to {}", name, key, default),
        );
        return;
    };

    if config.is_valid_log_level(level) {
        sink.add_pass(Some(name), "log_level", level);
        return;
    }

    let hint = suggest(level, levels.as_slice())
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default();
    sink.add_warning(
        Some(name),
        "log_level",
        &format!(
            "{}: invalid {} '{}' (valid: {}){}",
            name,
            key,
            level,
            levels.join(", "),
            hint
        ),
    );
}

fn check_elicitation(
    name: &str,
    view: &InstanceView<'_>,
    config: &Config,
    sink: &mut impl ValidationSink,
) {
    let fields = &config.fields;
    if view.env_str(&fields.elicitation) != Some("true") {
        return;
    }
    let Some(raw) = view.env_str(&fields.bulk_threshold) else {
        return;
    };

    if is_positive_integer(raw) {
        sink.add_pass(
            Some(name),
            "elicitation",
            &format!("{} = {}", fields.bulk_threshold, raw.trim()),
        );
    } else {
        sink.add_warning(
            Some(name),
            "elicitation",
            &format!(
                "{}: {} must be an integer >= 1 (got '{}')",
                name, fields.bulk_threshold, raw
            ),
        );
    }
}

/// Decimal digits (optional `+`, surrounding whitespace) with a non-zero value.
/// Values wider than any fixed-width integer are accepted.
fn is_positive_integer(raw: &str) -> bool {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}
