//! NDJSON event stream for `--json`.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use mcpcheck::{CheckEvent, CheckStatus, RunSummary, ValidationResult};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn status_str(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "pass",
        CheckStatus::Warning => "warning",
        CheckStatus::Error => "error",
    }
}

#[derive(Debug, Serialize)]
struct CheckPayload<'a> {
    event: &'static str,
    file: String,
    instance: Option<&'a str>,
    check: &'a str,
    status: &'static str,
    message: &'a str,
}

pub fn start_event(files: usize, config_source: &str) -> serde_json::Value {
    json!({
        "event": "start",
        "command": "mcpcheck",
        "version": env!("CARGO_PKG_VERSION"),
        "files": files,
        "config": config_source,
    })
}

pub fn file_start_event(path: &Path, index: usize, total: usize) -> serde_json::Value {
    json!({
        "event": "file_start",
        "file": path.display().to_string(),
        "index": index,
        "total": total,
    })
}

pub fn check_event(path: &Path, event: &CheckEvent) -> serde_json::Value {
    let payload = CheckPayload {
        event: "check",
        file: path.display().to_string(),
        instance: event.instance.as_deref(),
        check: &event.name,
        status: status_str(event.status),
        message: &event.message,
    };
    serde_json::to_value(payload).unwrap_or_default()
}

pub fn file_complete_event(path: &Path, result: &ValidationResult) -> serde_json::Value {
    json!({
        "event": "file_complete",
        "file": path.display().to_string(),
        "errors": result.errors,
        "warnings": result.warnings,
        "success": result.is_success(),
    })
}

pub fn complete_event(summary: &RunSummary) -> serde_json::Value {
    json!({
        "event": "complete",
        "command": "mcpcheck",
        "files": summary.files.len(),
        "failed_files": summary.failed_files(),
        "errors": summary.errors,
        "warnings": summary.warnings,
        "success": summary.is_success(),
    })
}
