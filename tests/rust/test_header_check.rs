#![cfg(unix)]

mod test_utils;

use pkg_probe::{HeaderCheck, ProbeError};
use test_utils::tool_dir;

#[test]
fn test_trivial_c_header_compiles() {
    let out = tool_dir();
    HeaderCheck::new("stdio.h")
        .out_dir(out.path())
        .check()
        .expect("stdio.h should compile");
}

#[test]
fn test_trivial_cpp_header_compiles() {
    let out = tool_dir();
    HeaderCheck::new("vector")
        .cpp(true)
        .out_dir(out.path())
        .check()
        .expect("<vector> should compile as C++");
}

#[test]
fn test_missing_header_is_fatal_with_instructions() {
    let out = tool_dir();
    let err = HeaderCheck::new("pkg_probe_no_such_header.h")
        .package("taglib")
        .cpp(true)
        .out_dir(out.path())
        .check()
        .unwrap_err();

    match err {
        ProbeError::HeaderCheckFailed { header, message } => {
            assert_eq!(header, "pkg_probe_no_such_header.h");
            assert!(message.contains("taglib not found"));
            assert!(message.contains("taglib-config is in your PATH"));
        }
        other => panic!("expected HeaderCheckFailed, got {:?}", other),
    }
}

#[test]
fn test_include_dir_is_honored() {
    let out = tool_dir();
    let include = tool_dir();
    std::fs::write(include.path().join("probe_extra.h"), "#define PROBE_EXTRA 1\n")
        .expect("failed to write header");

    HeaderCheck::new("probe_extra.h")
        .include(include.path())
        .out_dir(out.path())
        .check()
        .expect("header from the extra include dir should compile");
}
