//! Command-line interface.

mod args;
mod handlers;

pub use args::{Cli, LogLevel};
pub use handlers::{load_config, render_output, run};
