use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use mcpcheck::config::{self, ConfigSource};
use mcpcheck::{CheckEvent, RunObserver, RunSummary, ValidateUseCase, ValidationResult};

use crate::cli::ColorWhen;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::{self, write_event};
use crate::ui::output::print_config_warnings;
use crate::ui::views::validate as view;

pub fn cmd_validate(
    files: &[PathBuf],
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
    config_path: Option<&Path>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = config::resolve(config_path, &cwd)?;
    let ui = UiContext::new(json, verbose, color, &loaded.config.output);

    print_config_warnings(&loaded.warnings, ui.unicode);

    let use_case = ValidateUseCase::new(loaded.config);
    let summary = if json {
        run_json(&use_case, files, &loaded.source)?
    } else {
        run_text(&use_case, files, &loaded.source, ui)
    };

    if ui.annotations() {
        print_annotations(&summary);
    }

    if !summary.is_success() {
        std::process::exit(summary.exit_code());
    }

    Ok(())
}

fn run_json(
    use_case: &ValidateUseCase,
    files: &[PathBuf],
    source: &ConfigSource,
) -> Result<RunSummary> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &json::start_event(files.len(), &source.to_string()))?;

    let mut observer = JsonObserver { out: &mut out };
    let summary = use_case.execute_with_observer(files, &mut observer);

    write_event(&mut out, &json::complete_event(&summary))?;
    out.flush()?;
    Ok(summary)
}

fn run_text(
    use_case: &ValidateUseCase,
    files: &[PathBuf],
    source: &ConfigSource,
    ui: UiContext,
) -> RunSummary {
    if ui.verbose > 0 {
        print!(
            "{}",
            view::render_run_header(files.len(), source, ui.color, ui.unicode)
        );
    }

    let mut observer = TextObserver { ui, source };
    let summary = use_case.execute_with_observer(files, &mut observer);

    print!(
        "{}",
        view::render_run_summary(&summary, ui.color, ui.unicode)
    );
    summary
}

struct TextObserver<'a> {
    ui: UiContext,
    source: &'a ConfigSource,
}

impl RunObserver for TextObserver<'_> {
    fn file_started(&mut self, path: &Path, index: usize, total: usize) {
        print!(
            "{}",
            view::render_file_header(
                path,
                index,
                total,
                self.source,
                self.ui.verbose,
                self.ui.color,
                self.ui.unicode
            )
        );
    }

    fn check(&mut self, _path: &Path, event: &CheckEvent) {
        print!(
            "{}",
            view::render_check_line(event, self.ui.color, self.ui.unicode)
        );
        let _ = io::stdout().flush();
    }

    fn file_finished(&mut self, path: &Path, result: &ValidationResult) {
        print!(
            "{}",
            view::render_file_result(path, result, self.ui.color, self.ui.unicode)
        );
    }
}

struct JsonObserver<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> RunObserver for JsonObserver<'_, W> {
    fn file_started(&mut self, path: &Path, index: usize, total: usize) {
        let _ = write_event(&mut *self.out, &json::file_start_event(path, index, total));
    }

    fn check(&mut self, path: &Path, event: &CheckEvent) {
        let _ = write_event(&mut *self.out, &json::check_event(path, event));
    }

    fn file_finished(&mut self, path: &Path, result: &ValidationResult) {
        let _ = write_event(&mut *self.out, &json::file_complete_event(path, result));
    }
}

fn print_annotations(summary: &RunSummary) {
    for report in &summary.files {
        let file = report.path.display().to_string();
        let messages = report
            .result
            .errors
            .iter()
            .map(|m| (AnnotationLevel::Error, m))
            .chain(
                report
                    .result
                    .warnings
                    .iter()
                    .map(|m| (AnnotationLevel::Warning, m)),
            );
        for (level, message) in messages {
            println!(
                "{}",
                github_actions_annotation(level, message, Some(&file), Some("mcpcheck"))
            );
        }
    }
}
