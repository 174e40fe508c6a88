//! Ordered discovery of a package's config tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::exec;

/// How a package's config tool was located. Variants are listed in probe
/// order; the first one that applies wins and no later strategy is tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// A user-supplied package-specific tool, from
    /// [`Config::tool_override`] or the `<PKG>_CONFIG` environment
    /// variable. Accepted only if the executable is actually present.
    PackageTool(PathBuf),
    /// The generic `pkg-config` tool (or its override), accepted only
    /// after `pkg-config --exists <package>` succeeds.
    PkgConfig(PathBuf),
    /// A bare `<package>-config` found on the search path, as a last
    /// resort, with no further verification.
    PathFallback(PathBuf),
}

impl Strategy {
    /// Path to the tool this strategy resolved.
    pub fn tool(&self) -> &Path {
        match self {
            Strategy::PackageTool(p)
            | Strategy::PkgConfig(p)
            | Strategy::PathFallback(p) => p,
        }
    }

    /// Short human-readable label for progress messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Strategy::PackageTool(_) => "configured package tool",
            Strategy::PkgConfig(_) => "pkg-config",
            Strategy::PathFallback(_) => "package tool on PATH",
        }
    }

    /// Build the query invocation for this tool. Package-specific tools
    /// take only the query flag; `pkg-config` also needs the package name.
    pub(crate) fn query_command(
        &self,
        package: &str,
        query: &str,
        extra_args: &[OsString],
    ) -> Command {
        let mut cmd = Command::new(self.tool());
        cmd.arg(format!("--{}", query));
        if matches!(self, Strategy::PkgConfig(_)) {
            cmd.arg(package);
        }
        cmd.args(extra_args);
        cmd
    }
}

/// Evaluate the strategies in order and return the first that applies.
/// A single linear probe, no retries.
pub(crate) fn discover(config: &Config, package: &str) -> Option<Strategy> {
    let search_dirs = config.search_dirs();

    if let Some(tool) = config.package_tool(package) {
        if let Some(path) = exec::find_executable(&tool, &search_dirs) {
            return Some(Strategy::PackageTool(path));
        }
    }

    if config.pkg_config_enabled() {
        if let Some(path) = exec::find_executable(&config.pkg_config_tool(), &search_dirs)
        {
            let mut cmd = Command::new(&path);
            cmd.arg("--exists").arg(package);
            if exec::succeeds(cmd) {
                return Some(Strategy::PkgConfig(path));
            }
        }
    }

    let fallback = PathBuf::from(format!("{}-config", package));
    exec::find_executable(&fallback, &search_dirs).map(Strategy::PathFallback)
}
