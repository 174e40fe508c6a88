//! Probe configuration.
//!
//! All knobs live on an explicit [`Config`] value threaded through the
//! probe; nothing is accumulated in process-wide state.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ProbeError;
use crate::flags::Library;
use crate::probe;
use crate::strategy::{self, Strategy};

type MessageSink = Box<dyn Fn(&str) + Send + Sync + 'static>;

/// Configuration for a package probe.
///
/// ```no_run
/// let library = pkg_probe::Config::new()
///     .exclude_library_flags(false)
///     .probe("taglib")?;
/// # Ok::<(), pkg_probe::ProbeError>(())
/// ```
pub struct Config {
    tool_override: Option<PathBuf>,
    pkg_config_override: Option<PathBuf>,
    exclude_library_flags: bool,
    cargo_metadata: bool,
    env_metadata: bool,
    cross_compile_allowed: Option<bool>,
    extra_args: Vec<OsString>,
    search_path: Option<Vec<PathBuf>>,
    quiet: bool,
    message_sink: Option<MessageSink>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// A configuration with default behavior: environment overrides
    /// honored, library-only flags left empty, Cargo metadata emitted.
    pub fn new() -> Self {
        Config {
            tool_override: None,
            pkg_config_override: None,
            exclude_library_flags: false,
            cargo_metadata: true,
            env_metadata: true,
            cross_compile_allowed: None,
            extra_args: Vec::new(),
            search_path: None,
            quiet: false,
            message_sink: None,
        }
    }

    /// Explicit path to the package-specific config tool, taking
    /// precedence over the `<PKG>_CONFIG` environment variable.
    pub fn tool_override(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.tool_override = Some(path.into());
        self
    }

    /// Explicit path to the generic `pkg-config` tool, taking precedence
    /// over the `PKG_CONFIG` environment variable. An explicit override
    /// also bypasses the cross-compilation guard.
    pub fn pkg_config_override(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.pkg_config_override = Some(path.into());
        self
    }

    /// Whether to query `--libs-only-l` and subtract those tokens from the
    /// link flags.
    ///
    /// Off by default: several package-specific tools (taglib-config among
    /// them) do not implement the query, so the default leaves
    /// `library_flags` empty and the link flags whole.
    pub fn exclude_library_flags(&mut self, exclude: bool) -> &mut Self {
        self.exclude_library_flags = exclude;
        self
    }

    /// Whether a successful probe prints `cargo:` directives for the build
    /// script protocol. On by default.
    pub fn cargo_metadata(&mut self, emit: bool) -> &mut Self {
        self.cargo_metadata = emit;
        self
    }

    /// Whether to print `cargo:rerun-if-env-changed` lines for the
    /// override variables. On by default; only effective together with
    /// [`Config::cargo_metadata`].
    pub fn env_metadata(&mut self, emit: bool) -> &mut Self {
        self.env_metadata = emit;
        self
    }

    /// Force the default `pkg-config` strategy on or off when
    /// cross-compiling. Without this, the strategy is skipped whenever
    /// `TARGET` and `HOST` disagree, since a host `pkg-config` would
    /// report host libraries.
    pub fn cross_compile_allowed(&mut self, allowed: bool) -> &mut Self {
        self.cross_compile_allowed = Some(allowed);
        self
    }

    /// Extra arguments appended to every tool invocation (for example
    /// `--static`).
    pub fn extra_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the executable search path. By default the process `PATH`
    /// is used.
    pub fn search_path<I, P>(&mut self, dirs: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_path = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Suppress progress and failure messages.
    pub fn quiet(&mut self, quiet: bool) -> &mut Self {
        self.quiet = quiet;
        self
    }

    /// Redirect progress and failure messages to a callback instead of
    /// the default output (a `cargo:warning` line inside a build script,
    /// stderr otherwise).
    pub fn message_sink(
        &mut self,
        sink: impl Fn(&str) + Send + Sync + 'static,
    ) -> &mut Self {
        self.message_sink = Some(Box::new(sink));
        self
    }

    /// Run the discovery strategies for `package` without querying flags.
    /// `None` means no strategy applied.
    pub fn discover(&self, package: &str) -> Option<Strategy> {
        strategy::discover(self, package)
    }

    /// Locate `package` and query its compiler and linker flags.
    ///
    /// Computed fresh on every call; nothing is cached.
    pub fn probe(&self, package: &str) -> Result<Library, ProbeError> {
        probe::run(self, package)
    }

    pub(crate) fn package_tool(&self, package: &str) -> Option<PathBuf> {
        self.tool_override
            .clone()
            .or_else(|| env::var_os(envify(package) + "_CONFIG").map(PathBuf::from))
    }

    pub(crate) fn pkg_config_tool(&self) -> PathBuf {
        self.pkg_config_override
            .clone()
            .or_else(|| env::var_os("PKG_CONFIG").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("pkg-config"))
    }

    /// The default `pkg-config` is suppressed when cross-compiling; an
    /// explicit override is always trusted.
    pub(crate) fn pkg_config_enabled(&self) -> bool {
        if self.pkg_config_override.is_some() || env::var_os("PKG_CONFIG").is_some() {
            return true;
        }
        self.cross_compile_allowed
            .unwrap_or_else(|| !cross_compiling())
    }

    pub(crate) fn search_dirs(&self) -> Vec<PathBuf> {
        if let Some(dirs) = &self.search_path {
            return dirs.clone();
        }
        env::var_os("PATH")
            .map(|p| env::split_paths(&p).collect())
            .unwrap_or_default()
    }

    pub(crate) fn extra_args_slice(&self) -> &[OsString] {
        &self.extra_args
    }

    pub(crate) fn exclude_library_flags_enabled(&self) -> bool {
        self.exclude_library_flags
    }

    pub(crate) fn cargo_metadata_enabled(&self) -> bool {
        self.cargo_metadata
    }

    pub(crate) fn env_metadata_enabled(&self) -> bool {
        self.env_metadata
    }

    pub(crate) fn emit_message(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match &self.message_sink {
            Some(sink) => sink(msg),
            None if in_build_script() => println!("cargo:warning={}", msg),
            None => eprintln!("{}", msg),
        }
    }
}

/// `TARGET` and `HOST` are both set inside build scripts; anywhere else we
/// assume a host build.
fn cross_compiling() -> bool {
    match (env::var("TARGET"), env::var("HOST")) {
        (Ok(target), Ok(host)) => target != host,
        _ => false,
    }
}

fn in_build_script() -> bool {
    // CARGO_CFG_* variables are only set for build-script executions.
    env::var_os("CARGO_CFG_TARGET_OS").is_some()
}

/// Map a package name to its environment-variable prefix: uppercased, with
/// every non-alphanumeric byte replaced by `_` (`taglib` -> `TAGLIB`,
/// `gstreamer-1.0` -> `GSTREAMER_1_0`).
pub(crate) fn envify(package: &str) -> String {
    package
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
