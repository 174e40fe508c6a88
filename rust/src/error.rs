//! Error types for package discovery and verification.

use thiserror::Error;

/// Errors produced by package discovery and the header smoke test.
///
/// A config tool missing at one discovery level is not an error: discovery
/// falls through to the next strategy. Only the terminal outcomes surface
/// here.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No discovery strategy located a config tool for the package.
    ///
    /// Recoverable: the caller decides whether the build can proceed
    /// without the library.
    #[error("package configuration for {package} is not found")]
    NotFound { package: String },

    /// A discovered config tool failed at the shell level while being
    /// queried.
    #[error("{command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The required header did not compile.
    ///
    /// Fatal to the build. The message is the plain-text instruction
    /// intended for the person running the build.
    #[error("{message}")]
    HeaderCheckFailed { header: String, message: String },
}
