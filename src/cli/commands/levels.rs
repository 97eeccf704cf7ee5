//! `dotlog levels`: explains a mask, since exact and cumulative gates read the
//! same bits differently.

use crate::level::{Gate, Level, LevelMask};
use std::process::ExitCode;

#[must_use]
pub fn cmd_levels(mask: &str, gate: Gate) -> ExitCode {
    let mask: LevelMask = match mask.parse() {
        Ok(mask) => mask,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("mask {mask} (bits {:#09b}), gate {gate}", mask.bits());
    for level in Level::all() {
        let state = if gate.permits(mask, level) {
            "pass"
        } else {
            "drop"
        };
        println!("  {:<5}  {state}", level.as_str());
    }
    ExitCode::SUCCESS
}
