//! Command-line interface, parsed with Clap.

pub mod commands;

use crate::fmt::FormatPatch;
use crate::level::Gate;
use clap::{Args, Parser, Subcommand};

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Todo,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Todo => Self::Todo,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// Gate choice for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GateArg {
    Exact,
    Cumulative,
}

impl From<GateArg> for Gate {
    fn from(gate: GateArg) -> Self {
        match gate {
            GateArg::Exact => Self::Exact,
            GateArg::Cumulative => Self::Cumulative,
        }
    }
}

/// dotlog - level-filtered console logging with dotted lines.
#[derive(Parser)]
#[command(name = "dotlog", version, about = "Print log lines and dotted separators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Layout flags shared by `format` and `log`.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Line width including the origin label
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,
    /// Fill pattern for both sides
    #[arg(long)]
    pub fill: Option<String>,
    /// Left fill pattern (requires --right)
    #[arg(long, requires = "right")]
    pub left: Option<String>,
    /// Right fill pattern (requires --left)
    #[arg(long, requires = "left")]
    pub right: Option<String>,
    /// Text printed for an empty message
    #[arg(long)]
    pub placeholder: Option<String>,
    /// Separator between message and fill
    #[arg(long)]
    pub spacer: Option<String>,
}

impl LayoutArgs {
    /// Only the flags that were given.
    #[must_use]
    pub fn to_patch(&self) -> FormatPatch {
        let mut patch = FormatPatch::new();
        patch.total_width = self.width;
        patch.fill_pattern.clone_from(&self.fill);
        patch.empty_placeholder.clone_from(&self.placeholder);
        patch.spacer.clone_from(&self.spacer);
        if let (Some(left), Some(right)) = (&self.left, &self.right) {
            patch = patch.two_patterns(left, right);
        }
        patch
    }
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a dotted line without prefix.
    Format {
        /// Message words (empty prints the placeholder)
        message: Vec<String>,
        /// Origin label counted into the width
        #[arg(short, long)]
        origin: Option<String>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Log one message through a logger built from config.
    Log {
        #[arg(value_enum)]
        level: LogLevel,
        /// Message words
        message: Vec<String>,
        #[arg(short, long)]
        origin: Option<String>,
        /// Center the message in a dotted line
        #[arg(long)]
        dotted: bool,
        /// Override the configured level mask (e.g. "warn|error")
        #[arg(long)]
        mask: Option<String>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Show which levels a mask lets through.
    Levels {
        /// Mask expression: names joined by | or ,; "all"; "none"; or a number
        mask: String,
        #[arg(long, value_enum, default_value = "exact")]
        gate: GateArg,
    },
}

pub use commands::{cmd_format, cmd_levels, cmd_log};
