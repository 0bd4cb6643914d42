use crate::domain::request::InvocationRequest;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for nixglhost
///
/// Only the tokens before `NIX_BINARY` are ever matched against these
/// options; see [`crate::cli::parser`] for how the command line is split.
#[derive(Parser, Debug)]
#[command(
    name = "nixglhost",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run a program against the host's GPU driver libraries",
    long_about = "Runs NIX_BINARY with the dynamic library search path pointing at the host's \
                  GPU driver libraries, so programs built against another library set can load \
                  the native drivers. Everything after NIX_BINARY is passed to it unchanged.",
    args_override_self = true
)]
pub struct Args {
    /// Directory containing the host's GPU driver libraries
    ///
    /// An empty value counts as not given.
    #[arg(
        short = 'd',
        long = "driver-directory",
        value_name = "DIR",
        value_parser = clap::value_parser!(OsString)
    )]
    pub driver_directory: Option<OsString>,

    /// Print the library search path instead of running a program
    #[arg(short = 'p', long = "print-ld-library-path")]
    pub print_ld_library_path: bool,

    /// Program to run
    #[arg(value_name = "NIX_BINARY", required_unless_present = "print_ld_library_path")]
    pub binary: Option<OsString>,

    /// Arguments passed to NIX_BINARY unchanged
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl From<Args> for InvocationRequest {
    fn from(args: Args) -> Self {
        Self {
            driver_directory: args
                .driver_directory
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            print_library_path: args.print_ld_library_path,
            target_binary: args.binary,
            extra_args: args.args,
        }
    }
}
