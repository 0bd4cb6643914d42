// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod parser;

pub use args::Args;
pub use commands::{execute, run};
pub use parser::parse_invocation;
