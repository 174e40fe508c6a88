//! Compile smoke test.
//!
//! Probing only proves a config tool answered; it does not prove the
//! library's headers are usable. `HeaderCheck` compiles a minimal
//! translation unit including the package's primary header, which is the
//! build's real verification step.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::ProbeError;
use crate::flags::{split_flags, Library};

/// Builder for a one-header compile check.
///
/// ```no_run
/// # let library = pkg_probe::Config::new().probe("taglib")?;
/// pkg_probe::HeaderCheck::new("tag.h")
///     .package("taglib")
///     .cpp(true)
///     .flags_from(&library)
///     .check()?;
/// # Ok::<(), pkg_probe::ProbeError>(())
/// ```
pub struct HeaderCheck {
    header: String,
    package: Option<String>,
    cpp: bool,
    flags: Vec<String>,
    include_paths: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    target: Option<String>,
    host: Option<String>,
    opt_level: Option<u32>,
}

impl HeaderCheck {
    pub fn new(header: &str) -> Self {
        HeaderCheck {
            header: header.to_string(),
            package: None,
            cpp: false,
            flags: Vec::new(),
            include_paths: Vec::new(),
            out_dir: None,
            target: None,
            host: None,
            opt_level: None,
        }
    }

    /// Package name used in the failure instruction.
    pub fn package(&mut self, package: &str) -> &mut Self {
        self.package = Some(package.to_string());
        self
    }

    /// Compile as C++ instead of C. Required for C++ libraries such as
    /// taglib.
    pub fn cpp(&mut self, cpp: bool) -> &mut Self {
        self.cpp = cpp;
        self
    }

    /// Apply the compile flags of a probed library: `-I` tokens become
    /// include directories, everything else is passed through.
    pub fn flags_from(&mut self, library: &Library) -> &mut Self {
        for token in split_flags(&library.compile_flags) {
            match token.strip_prefix("-I") {
                Some(dir) if !dir.is_empty() => {
                    self.include_paths.push(PathBuf::from(dir));
                }
                _ => self.flags.push(token.to_string()),
            }
        }
        self
    }

    /// Add a single compiler flag.
    pub fn flag(&mut self, flag: &str) -> &mut Self {
        self.flags.push(flag.to_string());
        self
    }

    /// Add an include directory.
    pub fn include(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.include_paths.push(dir.into());
        self
    }

    /// Where to write the test source and object. Defaults to `OUT_DIR`,
    /// falling back to the system temp directory outside build scripts.
    pub fn out_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Target triple override. Defaults to `TARGET`, falling back to the
    /// triple this crate was compiled for.
    pub fn target(&mut self, triple: &str) -> &mut Self {
        self.target = Some(triple.to_string());
        self
    }

    /// Host triple override, same defaults as [`HeaderCheck::target`].
    pub fn host(&mut self, triple: &str) -> &mut Self {
        self.host = Some(triple.to_string());
        self
    }

    /// Optimization level for the check. Defaults to 0.
    pub fn opt_level(&mut self, level: u32) -> &mut Self {
        self.opt_level = Some(level);
        self
    }

    /// Write the test source and try to compile it.
    pub fn check(&self) -> Result<(), ProbeError> {
        let out_dir = self
            .out_dir
            .clone()
            .or_else(|| env::var_os("OUT_DIR").map(PathBuf::from))
            .unwrap_or_else(env::temp_dir);
        fs::create_dir_all(&out_dir).map_err(|e| self.failure(&e.to_string()))?;

        let stem = sanitize(&self.header);
        let source = out_dir.join(format!(
            "check_{}.{}",
            stem,
            if self.cpp { "cc" } else { "c" }
        ));
        let body = if self.cpp {
            format!("#include <{}>\n\nint main(int, char **) {{ return 0; }}\n", self.header)
        } else {
            format!("#include <{}>\n\nint main(void) {{ return 0; }}\n", self.header)
        };
        fs::write(&source, body).map_err(|e| self.failure(&e.to_string()))?;

        let target = self
            .target
            .clone()
            .or_else(|| env::var("TARGET").ok())
            .unwrap_or_else(host_triple);
        let host = self
            .host
            .clone()
            .or_else(|| env::var("HOST").ok())
            .unwrap_or_else(host_triple);

        let mut build = cc::Build::new();
        build
            .cargo_metadata(false)
            .warnings(false)
            .cpp(self.cpp)
            .debug(false)
            .opt_level(self.opt_level.unwrap_or(0))
            .target(&target)
            .host(&host)
            .out_dir(&out_dir)
            .file(&source);
        for dir in &self.include_paths {
            build.include(dir);
        }
        for flag in &self.flags {
            build.flag(flag);
        }

        build
            .try_compile(&format!("check_{}", stem))
            .map_err(|e| self.failure(&e.to_string()))
    }

    fn failure(&self, detail: &str) -> ProbeError {
        let message = match &self.package {
            Some(pkg) => format!(
                "{pkg} not found (<{hdr}> does not compile). \
                 Please ensure {pkg}-config is in your PATH. [{detail}]",
                hdr = self.header,
            ),
            None => format!("<{}> does not compile: {}", self.header, detail),
        };
        ProbeError::HeaderCheckFailed {
            header: self.header.clone(),
            message,
        }
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Triple this crate was compiled for. Build scripts and their helpers run
/// on the host, so outside a build script this is the host triple.
fn host_triple() -> String {
    let arch = if cfg!(target_arch = "x86_64") {
        "x86_64"
    } else if cfg!(target_arch = "aarch64") {
        "aarch64"
    } else if cfg!(target_arch = "x86") {
        "i686"
    } else if cfg!(target_arch = "arm") {
        "arm"
    } else {
        "unknown"
    };
    if cfg!(target_os = "linux") {
        format!("{}-unknown-linux-gnu", arch)
    } else if cfg!(target_os = "macos") {
        format!("{}-apple-darwin", arch)
    } else if cfg!(target_os = "windows") {
        format!("{}-pc-windows-msvc", arch)
    } else if cfg!(target_os = "freebsd") {
        format!("{}-unknown-freebsd", arch)
    } else {
        format!("{}-unknown-unknown", arch)
    }
}
