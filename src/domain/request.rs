use std::ffi::OsString;
use std::path::PathBuf;

/// A validated invocation, handed to the launcher once per process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationRequest {
    /// Directory holding pre-located driver libraries
    pub driver_directory: Option<PathBuf>,
    /// Print the library search path instead of running a program
    pub print_library_path: bool,
    /// Program to execute
    pub target_binary: Option<OsString>,
    /// Arguments for the program, verbatim and in order
    pub extra_args: Vec<OsString>,
}
