//! mcpcheck CLI - validate MCP server configuration files
//!
//! Usage: mcpcheck [OPTIONS] <FILE>...
//!
//! Every file is validated in order. The process exits with status 1 when no
//! files are given or when any file has at least one error.

use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    commands::validate::cmd_validate(
        &cli.files,
        cli.json,
        cli.verbose,
        cli.color,
        cli.config.as_deref(),
    )
}

fn print_usage() {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
    eprintln!();
    eprintln!("Provide one or more MCP server configuration files to validate, e.g.:");
    eprintln!("  mcpcheck ~/.config/mcp/servers.json");
    eprintln!();
    eprintln!("For more information, try '--help'.");
}
