//! Library search path composition.

use crate::domain::error::NixGlHostResult;
use std::ffi::{OsStr, OsString};
use std::path::Path;

#[cfg(windows)]
const SEPARATOR: &str = ";";
#[cfg(not(windows))]
const SEPARATOR: &str = ":";

/// Join driver directories into a search path value.
///
/// Fails when a directory contains the platform separator.
pub fn driver_search_path<I, P>(dirs: I) -> NixGlHostResult<OsString>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let dirs: Vec<_> = dirs.into_iter().collect();
    Ok(std::env::join_paths(dirs.iter().map(|dir| dir.as_ref().as_os_str()))?)
}

/// Put `driver_path` in front of an inherited search path.
pub fn prepend(driver_path: &OsStr, inherited: Option<&OsStr>) -> OsString {
    let mut combined = driver_path.to_os_string();
    if let Some(inherited) = inherited.filter(|value| !value.is_empty()) {
        if !combined.is_empty() {
            combined.push(SEPARATOR);
        }
        combined.push(inherited);
    }
    combined
}
