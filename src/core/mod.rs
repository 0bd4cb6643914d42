// Core module - Driver resolution and program launch
pub mod launcher;
pub mod library_path;

pub use launcher::{HostLauncher, LaunchOutcome, Launcher};
