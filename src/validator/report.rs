//! Validation sinks and entry functions

use std::path::Path;

use crate::config::Config;
use crate::error::McpCheckError;

use super::checks::{self, Trackers};
use super::document;
use super::types::{CheckEvent, CheckStatus, ValidationResult};

fn make_event(
    instance: Option<&str>,
    name: &str,
    status: CheckStatus,
    message: impl Into<String>,
) -> CheckEvent {
    CheckEvent {
        instance: instance.map(String::from),
        name: name.to_string(),
        status,
        message: message.into(),
    }
}

/// Receives check events as the validator produces them.
pub trait ValidationSink {
    fn add_check(&mut self, event: CheckEvent);

    fn add_pass(&mut self, instance: Option<&str>, name: &str, message: &str) {
        self.add_check(make_event(instance, name, CheckStatus::Pass, message));
    }

    fn add_warning(&mut self, instance: Option<&str>, name: &str, message: &str) {
        self.add_check(make_event(instance, name, CheckStatus::Warning, message));
    }

    fn add_error(&mut self, instance: Option<&str>, name: &str, message: &str) {
        self.add_check(make_event(instance, name, CheckStatus::Error, message));
    }
}

/// Collects every event of one validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub events: Vec<CheckEvent>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Split error and warning messages into a [`ValidationResult`], keeping order.
    pub fn into_result(self) -> ValidationResult {
        let mut result = ValidationResult::default();
        for event in self.events {
            match event.status {
                CheckStatus::Pass => {}
                CheckStatus::Warning => result.warnings.push(event.message),
                CheckStatus::Error => result.errors.push(event.message),
            }
        }
        result
    }
}

impl ValidationSink for ValidationReport {
    fn add_check(&mut self, event: CheckEvent) {
        self.events.push(event);
    }
}

/// Validate a file against the built-in rules.
pub fn validate(path: &Path) -> ValidationResult {
    validate_with_config(path, &Config::default())
}

/// Validate a file against the given rules.
pub fn validate_with_config(path: &Path, config: &Config) -> ValidationResult {
    validate_with_callback(path, config, |_| {})
}

/// Validate a file, streaming each check event to `on_check` as it happens.
pub fn validate_with_callback(
    path: &Path,
    config: &Config,
    on_check: impl FnMut(&CheckEvent),
) -> ValidationResult {
    let mut sink = CallbackSink::new(on_check);
    match document::read(path) {
        Ok(bytes) => {
            sink.add_pass(None, "file", &format!("{} readable", path.display()));
            validate_bytes_into(&bytes, config, &mut sink);
        }
        Err(err) => report_fatal(&err, &mut sink),
    }
    sink.report.into_result()
}

/// Validate already-loaded document text.
pub fn validate_str(text: &str, config: &Config) -> ValidationResult {
    let mut report = ValidationReport::new();
    validate_bytes_into(text.as_bytes(), config, &mut report);
    report.into_result()
}

struct CallbackSink<F> {
    report: ValidationReport,
    on_check: F,
}

impl<F> CallbackSink<F> {
    fn new(on_check: F) -> Self {
        Self {
            report: ValidationReport::new(),
            on_check,
        }
    }
}

impl<F: FnMut(&CheckEvent)> ValidationSink for CallbackSink<F> {
    fn add_check(&mut self, event: CheckEvent) {
        (self.on_check)(&event);
        self.report.events.push(event);
    }
}

fn validate_bytes_into(bytes: &[u8], config: &Config, sink: &mut impl ValidationSink) {
    let doc = match document::parse(bytes) {
        Ok(doc) => doc,
        Err(err) => return report_fatal(&err, sink),
    };

    sink.add_pass(
        None,
        "schema",
        &format!("{} instance(s) declared", doc.instances.len()),
    );

    let mut trackers = Trackers::default();
    for (name, value) in &doc.instances {
        checks::check_instance(name, value, config, &mut trackers, sink);
    }
}

fn report_fatal(err: &McpCheckError, sink: &mut impl ValidationSink) {
    let name = match err {
        McpCheckError::FileNotFound { .. } | McpCheckError::Io(_) => "file",
        McpCheckError::InvalidJson { .. } => "json",
        _ => "schema",
    };
    sink.add_error(None, name, &err.to_string());
}
