//! `dotlog format`: prints only the dotted line, handy for shell script banners.

use crate::cli::LayoutArgs;
use crate::fmt::{FormatOptions, dotted};
use crate::origin::Origin;
use std::process::ExitCode;

#[must_use]
pub fn cmd_format(message: &[String], origin: Option<&str>, layout: &LayoutArgs) -> ExitCode {
    let options = FormatOptions::default().apply(&layout.to_patch());
    let label = origin.map(|o| Origin::from(o).label()).unwrap_or_default();
    println!("{label}{}", dotted(&message.join(" "), &label, &options));
    ExitCode::SUCCESS
}
