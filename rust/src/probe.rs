//! The probe pipeline: discover a tool, query it, assemble the result.

use crate::config::{envify, Config};
use crate::error::ProbeError;
use crate::exec;
use crate::flags::{subtract_flags, Library};
use crate::strategy::Strategy;

pub(crate) fn run(config: &Config, package: &str) -> Result<Library, ProbeError> {
    if config.cargo_metadata_enabled() && config.env_metadata_enabled() {
        println!("cargo:rerun-if-env-changed={}_CONFIG", envify(package));
        println!("cargo:rerun-if-env-changed=PKG_CONFIG");
    }

    let Some(strategy) = config.discover(package) else {
        config.emit_message(&format!(
            "package configuration for {} is not found",
            package
        ));
        return Err(ProbeError::NotFound {
            package: package.to_string(),
        });
    };

    let compile_flags = query(config, &strategy, package, "cflags")?;
    let all_link_flags = query(config, &strategy, package, "libs")?;
    let library_flags = if config.exclude_library_flags_enabled() {
        query(config, &strategy, package, "libs-only-l")?
    } else {
        String::new()
    };
    let link_flags = subtract_flags(&all_link_flags, &library_flags);

    let library = Library {
        compile_flags,
        link_flags,
        library_flags,
    };

    config.emit_message(&format!(
        "package configuration for {} via {}",
        package,
        strategy.describe()
    ));
    config.emit_message(&format!("cflags: {}", library.compile_flags));
    config.emit_message(&format!("ldflags: {}", library.link_flags));
    config.emit_message(&format!("libs: {}", library.library_flags));

    if config.cargo_metadata_enabled() {
        library.emit_cargo_metadata();
    }
    Ok(library)
}

fn query(
    config: &Config,
    strategy: &Strategy,
    package: &str,
    what: &str,
) -> Result<String, ProbeError> {
    exec::run_capture(strategy.query_command(package, what, config.extra_args_slice()))
}
