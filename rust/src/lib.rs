//! Package-configuration discovery for Cargo build scripts.
//!
//! Given a native library's name, this crate locates a config tool for it,
//! queries the compiler and linker flags needed to build against it, and
//! emits the matching `cargo:` directives. Discovery tries, in order:
//!
//! 1. a user-supplied package-specific tool (`Config::tool_override` or
//!    the `<PKG>_CONFIG` environment variable),
//! 2. the generic `pkg-config`, only if it reports the package exists,
//! 3. a bare `<package>-config` found on `PATH`, as a last resort.
//!
//! The first strategy that applies wins. A probe proves only that a tool
//! answered; [`HeaderCheck`] is the verification step that actually
//! compiles the library's header.
//!
//! Tool invocations are blocking subprocess calls with no timeout: a hung
//! tool hangs the build.
//!
//! ## Environment Variables
//!
//! - `<PKG>_CONFIG` (e.g. `TAGLIB_CONFIG`): path to the package-specific
//!   config tool
//! - `PKG_CONFIG`: path to the generic pkg-config tool; also re-enables it
//!   when cross-compiling
//! - `TARGET` / `HOST`: consulted to detect cross-compilation
//!
//! ## Example build script
//!
//! ```no_run
//! fn main() {
//!     let taglib = pkg_probe::Config::new()
//!         .probe("taglib")
//!         .expect("taglib development files not found");
//!     pkg_probe::HeaderCheck::new("tag.h")
//!         .package("taglib")
//!         .cpp(true)
//!         .flags_from(&taglib)
//!         .check()
//!         .unwrap_or_else(|e| panic!("{}", e));
//! }
//! ```

mod config;
mod diagnostics;
mod error;
mod exec;
mod flags;
mod probe;
mod smoke;
mod strategy;

pub use config::Config;
pub use diagnostics::check_requirements;
pub use error::ProbeError;
pub use flags::{split_flags, subtract_flags, Library};
pub use smoke::HeaderCheck;
pub use strategy::Strategy;

/// Probe a package with the default [`Config`].
pub fn probe(package: &str) -> Result<Library, ProbeError> {
    Config::new().probe(package)
}
