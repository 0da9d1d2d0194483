pub mod commands;
pub mod context;
pub mod help;
pub mod output;
pub mod render;
mod shell;

pub use context::{CliMode, CommandError, LoopControl, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
