use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for failures raised after the invocation was accepted
pub const FAILURE_EXIT_CODE: i32 = 1;

/// nixglhost unified error type
#[derive(Error, Debug)]
pub enum NixGlHostError {
    /// Malformed invocation, rendered by clap (includes help/version requests)
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No driver directory given; pass --driver-directory or set NIXGLHOST_DRIVER_DIRECTORY")]
    NoDriverDirectory,

    #[error("Driver directory not found: {}", path.display())]
    DriverNotFound { path: PathBuf },

    #[error("No program to run")]
    MissingBinary,

    #[error("Cannot build library search path: {0}")]
    LibraryPath(#[from] std::env::JoinPathsError),

    #[error("Failed to execute {}: {source}", binary.to_string_lossy())]
    Exec {
        binary: OsString,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl NixGlHostError {
    /// Process exit status this error should terminate with.
    ///
    /// Usage errors follow clap's convention (2, or 0 for `--help`).
    pub fn exit_code(&self) -> i32 {
        match self {
            NixGlHostError::Usage(err) => err.exit_code(),
            _ => FAILURE_EXIT_CODE,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, NixGlHostError::Usage(_))
    }
}

pub type NixGlHostResult<T> = Result<T, NixGlHostError>;
