use crate::core::launcher::{HostLauncher, LaunchOutcome, Launcher};
use crate::domain::error::NixGlHostResult;
use crate::domain::request::InvocationRequest;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use tracing::debug;

/// Load configuration, set up logging and launch the request on the host.
pub fn run(request: InvocationRequest) -> NixGlHostResult<LaunchOutcome> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load_config()?;

    init_logging(&config.log_level)?;
    if let Some(path) = config_manager.config_path() {
        debug!(path = %path.display(), "configuration resolved");
    }

    let launcher = HostLauncher::new(config);
    execute(&request, &launcher)
}

/// Hand a parsed request to a launcher
pub fn execute<L>(request: &InvocationRequest, launcher: &L) -> NixGlHostResult<LaunchOutcome>
where
    L: Launcher + ?Sized,
{
    debug!(
        print_library_path = request.print_library_path,
        binary = ?request.target_binary,
        args = request.extra_args.len(),
        "dispatching invocation"
    );
    launcher.run(request)
}
