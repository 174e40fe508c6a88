#![cfg(unix)]

mod test_utils;

use pkg_probe::{split_flags, ProbeError};
use test_utils::*;

#[test]
fn test_probe_returns_the_tool_answers() {
    let dir = tool_dir();
    write_tool(dir.path(), "taglib-config", taglib_config_body());

    let (config, _) = confined_config(dir.path());
    let library = config.probe("taglib").expect("probe failed");

    assert_eq!(library.compile_flags, "-I/usr/include/taglib");
    assert_eq!(library.link_flags, "-L/usr/lib -ltag");
    assert_eq!(library.library_flags, "");
}

#[test]
fn test_probe_via_pkg_config_appends_package_name() {
    let dir = tool_dir();
    write_tool(dir.path(), "pkg-config", pkg_config_body());

    let (config, _) = confined_config(dir.path());
    let library = config.probe("taglib").expect("probe failed");

    assert_eq!(library.compile_flags, "-I/via-pkgconf/include/taglib");
    assert_eq!(library.link_flags, "-L/via-pkgconf/lib -ltag");
}

#[test]
fn test_probe_reports_progress_on_success() {
    let dir = tool_dir();
    write_tool(dir.path(), "taglib-config", taglib_config_body());

    let (config, messages) = confined_config(dir.path());
    config.probe("taglib").expect("probe failed");

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("package configuration for taglib")));
    assert!(messages.iter().any(|m| m == "cflags: -I/usr/include/taglib"));
    assert!(messages.iter().any(|m| m == "ldflags: -L/usr/lib -ltag"));
}

#[test]
fn test_libs_only_query_moves_library_tokens() {
    let dir = tool_dir();
    write_tool(
        dir.path(),
        "taglib-config",
        r#"case "$1" in
  --cflags) echo "-I/usr/include/taglib" ;;
  --libs) echo "-L/usr/lib -ltag -lz" ;;
  --libs-only-l) echo "-ltag -lz" ;;
  *) exit 1 ;;
esac"#,
    );

    let (mut config, _) = confined_config(dir.path());
    config.exclude_library_flags(true);
    let library = config.probe("taglib").expect("probe failed");

    assert_eq!(library.link_flags, "-L/usr/lib");
    assert_eq!(library.library_flags, "-ltag -lz");
    for token in split_flags(&library.library_flags) {
        assert!(!split_flags(&library.link_flags).contains(&token));
    }
    // Both halves still reach the linker through the parsed view.
    assert_eq!(library.libs(), vec!["tag".to_string(), "z".to_string()]);
}

#[test]
fn test_reachable_tool_yields_nonempty_flags() {
    let dir = tool_dir();
    write_tool(dir.path(), "pkg-config", pkg_config_body());

    let (config, _) = confined_config(dir.path());
    let library = config.probe("taglib").expect("probe failed");
    assert!(!library.compile_flags.is_empty());
    assert!(!library.link_flags.is_empty());
}

#[test]
fn test_tool_failing_mid_query_is_a_command_failure() {
    let dir = tool_dir();
    write_tool(
        dir.path(),
        "taglib-config",
        r#"echo "broken tool" >&2
exit 3"#,
    );

    let (config, _) = confined_config(dir.path());
    let err = config.probe("taglib").unwrap_err();
    match err {
        ProbeError::CommandFailed { command, reason } => {
            assert!(command.contains("taglib-config"));
            assert!(reason.contains("broken tool"));
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn test_extra_args_are_passed_through() {
    let dir = tool_dir();
    write_tool(
        dir.path(),
        "taglib-config",
        r#"if [ "$2" = "--static" ]; then
  case "$1" in
    --cflags) echo "-I/usr/include/taglib" ;;
    --libs) echo "-L/usr/lib -ltag -lz" ;;
  esac
else
  exit 1
fi"#,
    );

    let (mut config, _) = confined_config(dir.path());
    config.extra_args(["--static"]);
    let library = config.probe("taglib").expect("probe failed");
    assert_eq!(library.link_flags, "-L/usr/lib -ltag -lz");
}

#[test]
fn test_check_requirements_reports_without_panicking() {
    pkg_probe::check_requirements(&["taglib"]);
}
