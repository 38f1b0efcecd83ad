// CLI layer - turns command-line input into an export run.

#[path = "args.rs"]
pub mod args;

#[path = "logging.rs"]
pub mod logging;

#[path = "run.rs"]
pub mod run;

pub use args::Args;
pub use run::{resolve_config, run};
