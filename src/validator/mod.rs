//! Validation of `mcpServers` configuration documents
//!
//! A file is checked in a fixed order:
//! 1. the file exists and is readable
//! 2. it parses as JSON
//! 3. the root carries an `mcpServers` object
//! 4. every instance, in document order: name, command, args, auth, url,
//!    log file, log level, elicitation
//!
//! Steps 1-3 stop the file with a single error. Step 4 never stops early.

mod checks;
mod document;
mod report;
mod types;

pub use document::{parse, read, Document, InstanceView, SERVERS_FIELD};
pub use report::{
    validate, validate_str, validate_with_callback, validate_with_config, ValidationReport,
    ValidationSink,
};
pub use types::{CheckEvent, CheckStatus, ValidationResult};
