//! Flag strings returned by a probe and the token algebra over them.

use std::path::PathBuf;

/// The result of probing one package.
///
/// All three fields are the trimmed output of the package's config tool,
/// kept as flag strings so they can be spliced into a compiler invocation
/// unchanged. The parsed views ([`Library::include_paths`] and friends) are
/// derived from the tokens for feeding a `cc::Build`.
///
/// `link_flags` never contains a token present in `library_flags`; the
/// subtraction happens at construction time in the probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    /// Output of `--cflags`.
    pub compile_flags: String,
    /// Output of `--libs`, minus any `library_flags` tokens.
    pub link_flags: String,
    /// Output of `--libs-only-l` when that query is enabled, else empty.
    /// Many package-specific tools (taglib-config among them) do not
    /// implement the query, which is why it is off by default.
    pub library_flags: String,
}

impl Library {
    /// Directories named by `-I` tokens in `compile_flags`.
    pub fn include_paths(&self) -> Vec<PathBuf> {
        split_flags(&self.compile_flags)
            .iter()
            .filter_map(|t| t.strip_prefix("-I"))
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Directories named by `-L` tokens in `link_flags`.
    pub fn link_paths(&self) -> Vec<PathBuf> {
        split_flags(&self.link_flags)
            .iter()
            .filter_map(|t| t.strip_prefix("-L"))
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Library names from `-l` tokens, across both `link_flags` and
    /// `library_flags`.
    pub fn libs(&self) -> Vec<String> {
        split_flags(&self.link_flags)
            .iter()
            .chain(split_flags(&self.library_flags).iter())
            .filter_map(|t| t.strip_prefix("-l"))
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Emit the Cargo build-script directives for linking against this
    /// library: `rustc-link-search` for every `-L` directory,
    /// `rustc-link-lib` for every `-l` name, plus `include`/`cflags`
    /// metadata lines for downstream crates.
    pub fn emit_cargo_metadata(&self) {
        for dir in self.link_paths() {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        for lib in self.libs() {
            println!("cargo:rustc-link-lib={}", lib);
        }
        for dir in self.include_paths() {
            println!("cargo:include={}", dir.display());
        }
        if !self.compile_flags.is_empty() {
            println!("cargo:cflags={}", self.compile_flags);
        }
    }
}

/// Whitespace tokens of a flag string.
pub fn split_flags(flags: &str) -> Vec<&str> {
    flags.split_whitespace().collect()
}

/// Tokens of `flags` minus the token set of `exclude`, rejoined with single
/// spaces. Order of the surviving tokens is preserved.
pub fn subtract_flags(flags: &str, exclude: &str) -> String {
    let excluded: std::collections::HashSet<&str> =
        exclude.split_whitespace().collect();
    flags
        .split_whitespace()
        .filter(|t| !excluded.contains(t))
        .collect::<Vec<_>>()
        .join(" ")
}
