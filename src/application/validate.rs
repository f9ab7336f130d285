//! Validate Use Case
//!
//! Runs the validator over a list of files in order and keeps running totals.
//! Every file is validated regardless of how earlier files turned out.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::validator::{validate_with_callback, CheckEvent, ValidationResult};

/// Outcome for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: ValidationResult,
}

/// Aggregate over all files of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: Vec<FileReport>,
    /// Total error messages across all files
    pub errors: usize,
    /// Total warning messages across all files
    pub warnings: usize,
}

impl RunSummary {
    fn record(&mut self, path: &Path, result: ValidationResult) {
        self.errors += result.errors.len();
        self.warnings += result.warnings.len();
        self.files.push(FileReport {
            path: path.to_path_buf(),
            result,
        });
    }

    /// Files with at least one error
    pub fn failed_files(&self) -> usize {
        self.files.iter().filter(|f| !f.result.is_success()).count()
    }

    /// No errors in any file; warnings never fail a run
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Progress hooks for a run. All methods default to no-ops.
pub trait RunObserver {
    fn file_started(&mut self, _path: &Path, _index: usize, _total: usize) {}

    fn check(&mut self, _path: &Path, _event: &CheckEvent) {}

    fn file_finished(&mut self, _path: &Path, _result: &ValidationResult) {}
}

/// Observer that ignores everything
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Validate Use Case
pub struct ValidateUseCase {
    config: Config,
}

impl ValidateUseCase {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validate every path in order
    pub fn execute(&self, paths: &[PathBuf]) -> RunSummary {
        self.execute_with_observer(paths, &mut SilentObserver)
    }

    /// Validate every path in order, reporting progress to `observer`
    pub fn execute_with_observer(
        &self,
        paths: &[PathBuf],
        observer: &mut impl RunObserver,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            observer.file_started(path, index, total);
            let result = validate_with_callback(path, &self.config, |event| {
                observer.check(path, event);
            });
            observer.file_finished(path, &result);
            summary.record(path, result);
        }

        summary
    }
}
