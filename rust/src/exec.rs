//! Subprocess plumbing: executable lookup and captured invocations.
//!
//! Every invocation is a blocking call with no timeout.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ProbeError;

/// Resolve a command name against the given search directories.
///
/// A name containing a path separator is checked directly; a bare name is
/// tried in each directory in order. Returns the first candidate that is an
/// executable file.
pub(crate) fn find_executable(name: &Path, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.components().count() > 1 {
        return candidates(name.to_path_buf()).find(|p| is_executable(p));
    }
    search_dirs
        .iter()
        .flat_map(|dir| candidates(dir.join(name)))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn candidates(path: PathBuf) -> impl Iterator<Item = PathBuf> {
    std::iter::once(path)
}

#[cfg(windows)]
fn candidates(path: PathBuf) -> impl Iterator<Item = PathBuf> {
    // A bare tool name on Windows usually means `<name>.exe`; also accept
    // the name as given in case it already carries an extension.
    let with_exe = (path.extension().is_none()).then(|| path.with_extension("exe"));
    std::iter::once(path).chain(with_exe)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run a command, returning its trimmed stdout.
///
/// Spawn failure and non-zero exit both map to [`ProbeError::CommandFailed`]
/// carrying the rendered command line and the tool's stderr.
pub(crate) fn run_capture(mut cmd: Command) -> Result<String, ProbeError> {
    let rendered = format!("{:?}", cmd);
    let output = cmd.output().map_err(|e| ProbeError::CommandFailed {
        command: rendered.clone(),
        reason: e.to_string(),
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::CommandFailed {
            command: rendered,
            reason: format!(
                "exit status {:?}: {}",
                output.status.code(),
                stderr.trim()
            ),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a command for its exit status only. Spawn failure counts as failure.
pub(crate) fn succeeds(mut cmd: Command) -> bool {
    cmd.output().map(|o| o.status.success()).unwrap_or(false)
}
