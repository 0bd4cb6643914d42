//! nixglhost Library
//!
//! Runs programs against the host's native GPU driver libraries by putting
//! the driver directory on the dynamic linker's search path before launch.
//!
//! The command line is parsed into an [`InvocationRequest`], which a
//! [`Launcher`] then either prints a search path for or executes.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use cli::{execute, parse_invocation, run};
pub use crate::core::launcher::{HostLauncher, LaunchOutcome, Launcher};
pub use domain::config::NixGlHostConfig;
pub use domain::error::{NixGlHostError, NixGlHostResult};
pub use domain::request::InvocationRequest;
