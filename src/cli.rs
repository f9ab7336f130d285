use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// mcpcheck - validate MCP server configuration files
#[derive(Parser, Debug)]
#[command(name = "mcpcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status is 1 when any file has errors; warnings alone never fail a run.")]
pub struct Cli {
    /// Configuration files to validate, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Emit NDJSON events instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Path to an mcpcheck.toml rules file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
