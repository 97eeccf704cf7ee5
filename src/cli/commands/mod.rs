//! One file per subcommand; each handler reports its own errors and returns
//! the exit code.

mod format;
mod levels;
mod log;

pub use format::cmd_format;
pub use levels::cmd_levels;
pub use log::cmd_log;
