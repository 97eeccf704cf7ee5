//! `dotlog` binary: dotted banners and one-shot log lines from shell scripts.
//!
//! Usage:
//!   dotlog format [--origin O] [--width N] <msg>...   Print a dotted line
//!   dotlog log <level> [--dotted] [--mask M] <msg>... Log through the configured logger
//!   dotlog levels <mask> [--gate exact|cumulative]    Show which levels pass

use clap::Parser;
use dotlog::cli::{Cli, Command, cmd_format, cmd_levels, cmd_log};
use dotlog::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Format {
            message,
            origin,
            layout,
        } => cmd_format(&message, origin.as_deref(), &layout),
        Command::Log {
            level,
            message,
            origin,
            dotted,
            mask,
            layout,
        } => {
            let config = match Config::load() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error loading config: {e}");
                    return ExitCode::FAILURE;
                }
            };
            cmd_log(
                &config,
                level.into(),
                &message,
                origin.as_deref(),
                dotted,
                mask.as_deref(),
                &layout,
            )
        }
        Command::Levels { mask, gate } => cmd_levels(&mask, gate.into()),
    }
}
