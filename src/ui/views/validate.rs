use std::path::Path;

use mcpcheck::{CheckEvent, CheckStatus, ConfigSource, RunSummary, ValidationResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::messages::MessageBlock;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_run_header(
    files: usize,
    source: &ConfigSource,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "mcpcheck");
    header.add("Files", files.to_string());
    header.add("Config", source.to_string());
    format!("{}\n", header.render(supports_color, supports_unicode))
}

pub fn render_file_header(
    path: &Path,
    index: usize,
    total: usize,
    source: &ConfigSource,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::File, path.display().to_string());
    if total > 1 {
        header.add("File", format!("{} of {}", index + 1, total));
    }
    if verbose > 0 {
        header.add("Config", source.to_string());
    }
    header.render(supports_color, supports_unicode)
}

/// One progress line per check, printed as the check completes.
pub fn render_check_line(
    event: &CheckEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::from(event.status).colored(supports_color, supports_unicode);
    match event.status {
        CheckStatus::Pass => {
            let label = match &event.instance {
                Some(instance) => format!("{} {}", instance, event.name),
                None => event.name.clone(),
            };
            format!(
                "  {} {} {}\n",
                icon,
                label,
                ColoredText::dim(format!("({})", event.message)).render(supports_color)
            )
        }
        CheckStatus::Warning | CheckStatus::Error => format!(
            "  {} {}\n",
            icon,
            ColoredText::new(event.message.as_str(), event.status.into()).render(supports_color)
        ),
    }
}

pub fn render_file_result(
    path: &Path,
    result: &ValidationResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("\n");
    if result.is_clean() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{}: no issues found", path.display()))
                .render(supports_color)
        ));
    } else {
        out.push_str(
            &MessageBlock::errors(&result.errors).render(supports_color, supports_unicode),
        );
        out.push_str(
            &MessageBlock::warnings(&result.warnings).render(supports_color, supports_unicode),
        );
    }
    out.push('\n');
    out
}

pub fn render_run_summary(
    summary: &RunSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let files = summary.files.len();
    let line = format!(
        "Summary: {} file(s), {} error(s), {} warning(s)\n",
        files, summary.errors, summary.warnings
    );

    let mut block = if !summary.is_success() {
        let mut s = ResultSummary::failure("Validation failed");
        s.with_next_step("Fix the errors above and re-run mcpcheck");
        s
    } else if summary.warnings > 0 {
        ResultSummary::partial("Validation passed with warnings")
    } else {
        ResultSummary::success("All files valid")
    };
    block.add_stat("file(s) checked", files);
    block.add_stat("file(s) with errors", summary.failed_files());
    block.add_stat("error(s)", summary.errors);
    block.add_stat("warning(s)", summary.warnings);

    format!("{}\n{}", line, block.render(supports_color, supports_unicode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpcheck::FileReport;
    use std::path::PathBuf;

    fn event(instance: Option<&str>, status: CheckStatus, message: &str) -> CheckEvent {
        CheckEvent {
            instance: instance.map(String::from),
            name: "command".to_string(),
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn run_header_lists_file_count() {
        let rendered = render_run_header(3, &ConfigSource::Defaults, false, false);
        assert!(rendered.starts_with("[CHECK] mcpcheck\n"));
        assert!(rendered.contains("Files: 3"));
    }

    #[test]
    fn pass_line_names_instance_and_check() {
        let line = render_check_line(&event(Some("prod"), CheckStatus::Pass, "npx"), false, false);
        assert_eq!(line, "  [OK] prod command (npx)\n");
    }

    #[test]
    fn warning_line_shows_message() {
        let line = render_check_line(
            &event(Some("prod"), CheckStatus::Warning, "prod: unusual command 'python'"),
            false,
            true,
        );
        assert_eq!(line, "  ⚠ prod: unusual command 'python'\n");
    }

    #[test]
    fn clean_result_renders_all_clear() {
        let rendered =
            render_file_result(Path::new("a.json"), &ValidationResult::default(), false, false);
        assert!(rendered.contains("[OK] a.json: no issues found"));
    }

    #[test]
    fn errors_render_before_warnings() {
        let result = ValidationResult {
            errors: vec!["x: missing required field 'command'".to_string()],
            warnings: vec!["x: LOG_FILE not set; logs will go to stderr".to_string()],
        };
        let rendered = render_file_result(Path::new("a.json"), &result, false, false);
        let errors_at = rendered.find("Errors (1)").unwrap();
        let warnings_at = rendered.find("Warnings (1)").unwrap();
        assert!(errors_at < warnings_at);
        assert!(!rendered.contains("no issues found"));
    }

    #[test]
    fn verbose_header_shows_config_source() {
        let quiet = render_file_header(
            Path::new("a.json"),
            0,
            1,
            &ConfigSource::Defaults,
            0,
            false,
            false,
        );
        assert!(!quiet.contains("Config:"));

        let verbose = render_file_header(
            Path::new("a.json"),
            0,
            2,
            &ConfigSource::Defaults,
            1,
            false,
            false,
        );
        assert!(verbose.contains("File: 1 of 2"));
        assert!(verbose.contains("Config: built-in defaults"));
    }

    #[test]
    fn run_summary_line_has_totals() {
        let summary = RunSummary {
            files: vec![FileReport {
                path: PathBuf::from("a.json"),
                result: ValidationResult {
                    errors: vec!["e".to_string()],
                    warnings: vec!["w".to_string(), "w2".to_string()],
                },
            }],
            errors: 1,
            warnings: 2,
        };
        let rendered = render_run_summary(&summary, false, false);
        assert!(rendered.starts_with("Summary: 1 file(s), 1 error(s), 2 warning(s)\n"));
        assert!(rendered.contains("[FAIL] Validation failed"));
    }
}
