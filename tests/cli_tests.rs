use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::str;
use tempfile::TempDir;

/// CLI interface tests
#[cfg(test)]
mod cli_tests {
    use super::*;

    /// Run the built binary with an empty config and a clean environment
    fn nixglhost(workdir: &Path, args: &[&str]) -> Output {
        let config = workdir.join("config.toml");
        if !config.exists() {
            fs::write(&config, "").expect("Failed to write config");
        }

        Command::new(env!("CARGO_BIN_EXE_nixglhost"))
            .args(args)
            .env("NIXGLHOST_CONFIG", &config)
            .env_remove("NIXGLHOST_DRIVER_DIRECTORY")
            .env_remove("NIXGLHOST_LOG")
            .output()
            .expect("Failed to execute command")
    }

    fn stdout(output: &Output) -> &str {
        str::from_utf8(&output.stdout).expect("Invalid UTF-8")
    }

    fn stderr(output: &Output) -> &str {
        str::from_utf8(&output.stderr).expect("Invalid UTF-8")
    }

    #[test]
    fn test_cli_help() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &["--help"]);

        assert!(output.status.success());
        let stdout = stdout(&output);
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains("NIX_BINARY"));
        assert!(stdout.contains("--driver-directory"));
        assert!(stdout.contains("--print-ld-library-path"));
    }

    #[test]
    fn test_cli_version() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &["--version"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_no_arguments() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &[]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("NIX_BINARY"));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_cli_unknown_option() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &["-x", "mybinary"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("-x"));
    }

    #[test]
    fn test_cli_driver_directory_without_value() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &["-d"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("--driver-directory"));
    }

    #[test]
    fn test_cli_print_library_path() {
        let temp = TempDir::new().unwrap();
        let drivers = temp.path().join("drivers");
        fs::create_dir(&drivers).unwrap();
        let drivers_arg = drivers.to_str().unwrap();

        let output = nixglhost(temp.path(), &["-p", "-d", drivers_arg]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), format!("{}\n", drivers_arg));
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_print_wins_over_binary() {
        let temp = TempDir::new().unwrap();
        let drivers = temp.path().join("drivers");
        fs::create_dir(&drivers).unwrap();
        let marker = temp.path().join("ran");
        let script = format!("touch {:?}; exit 9", marker.to_str().unwrap());
        let drivers_arg = drivers.to_str().unwrap();

        let output = nixglhost(temp.path(), &["-p", "-d", drivers_arg, "sh", "-c", &script]);

        assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), format!("{}\n", drivers_arg));
        assert!(!marker.exists());
    }

    #[test]
    fn test_cli_print_without_driver_directory() {
        let temp = TempDir::new().unwrap();
        let output = nixglhost(temp.path(), &["-p"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Error: No driver directory"));
    }

    #[test]
    fn test_cli_driver_directory_from_config() {
        let temp = TempDir::new().unwrap();
        let drivers = temp.path().join("drivers");
        fs::create_dir(&drivers).unwrap();
        fs::write(
            temp.path().join("config.toml"),
            format!("driver_directory = {:?}\n", drivers.to_str().unwrap()),
        )
        .unwrap();

        let output = nixglhost(temp.path(), &["-p"]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output).trim_end(), drivers.to_str().unwrap());
    }

    #[test]
    fn test_cli_missing_driver_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let output = nixglhost(temp.path(), &["-d", missing.to_str().unwrap(), "true"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Driver directory not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_runs_binary_with_library_path() {
        let temp = TempDir::new().unwrap();
        let drivers = temp.path().join("drivers");
        fs::create_dir(&drivers).unwrap();
        let config = temp.path().join("config.toml");
        fs::write(&config, "").unwrap();

        let output = Command::new(env!("CARGO_BIN_EXE_nixglhost"))
            .args(["-d", drivers.to_str().unwrap(), "sh", "-c", "printf %s \"$LD_LIBRARY_PATH\"; exit 5"])
            .env("NIXGLHOST_CONFIG", &config)
            .env("LD_LIBRARY_PATH", "/opt/lib")
            .env_remove("NIXGLHOST_LOG")
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(5));
        assert_eq!(stdout(&output), format!("{}:/opt/lib", drivers.display()));
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_passes_flags_through() {
        let temp = TempDir::new().unwrap();
        let drivers = temp.path().join("drivers");
        fs::create_dir(&drivers).unwrap();

        let output = nixglhost(
            temp.path(),
            &["-d", drivers.to_str().unwrap(), "sh", "--", "-c", "echo \"$@\"", "sh", "-d", "-p", "--"],
        );

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "-d -p --\n");
    }
}
