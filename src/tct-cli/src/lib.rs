//! Render binary for the feature catalog page.
//!
//! - `cli/` - argument parsing, config merge, and the run handler
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod logging;

pub use logging::init_logging;
