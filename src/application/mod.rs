//! Application layer: use cases driven by the CLI

mod validate;

pub use validate::{FileReport, RunObserver, RunSummary, SilentObserver, ValidateUseCase};
