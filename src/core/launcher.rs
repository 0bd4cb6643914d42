//! Driver directory resolution and program launch.
//!
//! The launcher never scans the host for drivers: the directory comes from
//! the command line, the environment or the configuration file, in that
//! order. The target program runs as a child process and its exit status
//! becomes ours.

use crate::core::library_path::{driver_search_path, prepend};
use crate::domain::config::NixGlHostConfig;
use crate::domain::error::{NixGlHostError, NixGlHostResult};
use crate::domain::request::InvocationRequest;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

/// Environment variable naming the driver directory when `-d` is absent
pub const DRIVER_DIRECTORY_ENV: &str = "NIXGLHOST_DRIVER_DIRECTORY";

/// Exit status offset for children killed by a signal
const SIGNAL_EXIT_BASE: i32 = 128;

/// What a launch ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The search path was written to standard output
    Printed,
    /// The child exited with this status
    Exited(i32),
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Printed => 0,
            LaunchOutcome::Exited(code) => *code,
        }
    }
}

/// Downstream half of an invocation: print the search path or run the program
pub trait Launcher {
    fn run(&self, request: &InvocationRequest) -> NixGlHostResult<LaunchOutcome>;
}

/// Launcher for the current host
#[derive(Debug, Clone)]
pub struct HostLauncher {
    config: NixGlHostConfig,
    env_driver_directory: Option<PathBuf>,
    inherited_search_path: Option<OsString>,
}

impl HostLauncher {
    /// Create a launcher that reads its fallbacks from the process environment
    pub fn new(config: NixGlHostConfig) -> Self {
        let env_driver_directory = std::env::var_os(DRIVER_DIRECTORY_ENV).map(PathBuf::from);
        let inherited_search_path = std::env::var_os(&config.search_path_variable);
        Self::with_environment(config, env_driver_directory, inherited_search_path)
    }

    /// Create a launcher with explicit environment values
    pub fn with_environment(
        config: NixGlHostConfig,
        env_driver_directory: Option<PathBuf>,
        inherited_search_path: Option<OsString>,
    ) -> Self {
        Self {
            config,
            env_driver_directory: env_driver_directory.filter(|dir| !dir.as_os_str().is_empty()),
            inherited_search_path,
        }
    }

    /// Pick the driver directory: command line, then environment, then config.
    pub fn resolve_driver_directory(&self, request: &InvocationRequest) -> NixGlHostResult<PathBuf> {
        let (dir, source) = if let Some(dir) = &request.driver_directory {
            (dir.clone(), "command line")
        } else if let Some(dir) = &self.env_driver_directory {
            (dir.clone(), DRIVER_DIRECTORY_ENV)
        } else if let Some(dir) = &self.config.driver_directory {
            (dir.clone(), "configuration")
        } else {
            return Err(NixGlHostError::NoDriverDirectory);
        };

        if !dir.is_dir() {
            return Err(NixGlHostError::DriverNotFound { path: dir });
        }

        debug!(dir = %dir.display(), source, "resolved driver directory");
        Ok(dir)
    }

    /// Search path made of the driver directory and the configured extras.
    pub fn driver_search_path(&self, request: &InvocationRequest) -> NixGlHostResult<OsString> {
        let driver_dir = self.resolve_driver_directory(request)?;
        for extra in &self.config.extra_library_dirs {
            if !extra.is_dir() {
                warn!(dir = %extra.display(), "extra library directory does not exist");
            }
        }

        let dirs = std::iter::once(&driver_dir).chain(&self.config.extra_library_dirs);
        driver_search_path(dirs)
    }

    /// Write the driver search path, newline terminated.
    pub fn print_library_path<W: Write>(
        &self,
        request: &InvocationRequest,
        out: &mut W,
    ) -> NixGlHostResult<()> {
        let search_path = self.driver_search_path(request)?;

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            out.write_all(search_path.as_bytes())?;
            out.write_all(b"\n")?;
        }
        #[cfg(not(unix))]
        writeln!(out, "{}", search_path.to_string_lossy())?;

        out.flush()?;
        Ok(())
    }

    /// Build the child command with the driver search path applied.
    pub fn build_command(&self, request: &InvocationRequest) -> NixGlHostResult<Command> {
        let binary = request
            .target_binary
            .as_ref()
            .ok_or(NixGlHostError::MissingBinary)?;

        let driver_path = self.driver_search_path(request)?;
        let search_path = prepend(&driver_path, self.inherited_search_path.as_deref());

        let mut command = Command::new(binary);
        command
            .args(&request.extra_args)
            .env(&self.config.search_path_variable, &search_path);

        debug!(
            variable = %self.config.search_path_variable,
            value = %search_path.to_string_lossy(),
            "library search path"
        );
        Ok(command)
    }
}

impl Launcher for HostLauncher {
    fn run(&self, request: &InvocationRequest) -> NixGlHostResult<LaunchOutcome> {
        if request.print_library_path {
            let stdout = io::stdout();
            self.print_library_path(request, &mut stdout.lock())?;
            return Ok(LaunchOutcome::Printed);
        }

        let mut command = self.build_command(request)?;
        let binary = command.get_program().to_os_string();
        info!(binary = %binary.to_string_lossy(), "launching");

        let status = command
            .status()
            .map_err(|source| NixGlHostError::Exec { binary, source })?;

        let code = exit_code_of(status);
        debug!(code, "child exited");
        Ok(LaunchOutcome::Exited(code))
    }
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    crate::domain::error::FAILURE_EXIT_CODE
}
