//! `dotlog log`: one message through the configured logger.

use crate::cli::LayoutArgs;
use crate::config::Config;
use crate::level::{Level, LevelMask};
use crate::logger::{Logger, Message};
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(
    config: &Config,
    level: Level,
    words: &[String],
    origin: Option<&str>,
    dotted: bool,
    mask: Option<&str>,
    layout: &LayoutArgs,
) -> ExitCode {
    let logger = match Logger::from_config(config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(mask) = mask {
        match mask.parse::<LevelMask>() {
            Ok(mask) => logger.set_level(mask),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut message = Message::new(words.join(" ")).options(layout.to_patch());
    if let Some(origin) = origin {
        message = message.origin(origin);
    }
    if dotted {
        message = message.dotted();
    }

    match logger.try_log(level, message) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
